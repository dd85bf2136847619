use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ilot_planner::core::types::BBox;
use ilot_planner::{GenerationConfig, GenerationPipeline, Objective, Room, RoomAdapter, RoomType, ZoneCatalog};

fn floor(rooms: usize) -> Vec<Room> {
    (0..rooms)
        .filter_map(|i| {
            let x = (i % 10) as f64 * 22.0;
            let y = (i / 10) as f64 * 17.0;
            RoomAdapter::from_bounds(
                &format!("room_{}", i),
                RoomType::OpenOffice,
                BBox::new(x, y, x + 20.0, y + 15.0),
            )
            .ok()
        })
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let rooms = floor(50);

    for objective in [Objective::Balanced, Objective::Density] {
        let pipeline = GenerationPipeline::new(
            ZoneCatalog::with_defaults(),
            GenerationConfig {
                optimization_objective: objective,
                ..Default::default()
            },
        );
        c.bench_function(&format!("generate_50_rooms_{:?}", objective), |b| {
            b.iter(|| pipeline.generate(black_box(&rooms)))
        });
    }
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
