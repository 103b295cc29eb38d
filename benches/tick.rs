//! Per-tick throughput of the locomotion pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use locomotion::game::tick::{replay, FlatGround};
use locomotion::{InputFrame, InputRecording, LocomotionConfig, LocomotionController, Yaw, FIXED_DT};

fn random_frames(count: usize, seed: u64) -> Vec<InputFrame> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut frame = InputFrame::with_movement(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
            frame.set_sprint(rng.gen_bool(0.6));
            frame.set_jump(rng.gen_bool(0.02));
            frame
        })
        .collect()
}

fn bench_tick(c: &mut Criterion) {
    let frames = random_frames(1_000, 42);
    let facing = Yaw::from_degrees(45.0);

    c.bench_function("controller_tick_1000", |b| {
        b.iter(|| {
            let mut controller = LocomotionController::new(LocomotionConfig::controller())
                .expect("preset is valid");
            let mut ground = FlatGround::default();
            for frame in &frames {
                black_box(controller.tick(frame, FIXED_DT, Some(&facing), &mut ground));
            }
            controller.state().stamina()
        })
    });
}

fn bench_replay(c: &mut Criterion) {
    let recording = InputRecording::from_frames(FIXED_DT, random_frames(3_000, 7));
    let encoded = recording.encode().expect("recording encodes");

    c.bench_function("decode_and_replay_3000", |b| {
        b.iter(|| {
            let decoded = InputRecording::decode(black_box(&encoded)).expect("recording decodes");
            replay(LocomotionConfig::controller(), &decoded, None)
                .expect("preset is valid")
                .final_hash
        })
    });
}

criterion_group!(benches, bench_tick, bench_replay);
criterion_main!(benches);
