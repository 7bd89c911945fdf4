use criterion::{criterion_group, criterion_main, Criterion};
use impdip_ratings::{
    model::{rating_ledger::RatingLedger, scheduler::Scheduler},
    utils::test_utils::{generate_random_games, RecordingSink}
};

fn process_games(count_games: usize, count_players: usize) {
    let games = generate_random_games(count_games, count_players, 3, 727);

    let mut ledger = RatingLedger::new();
    let mut sink = RecordingSink::default();
    Scheduler::new(games).run(&mut ledger, &mut sink).unwrap();
}

fn group_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("game-processing");
    group.sample_size(25);
    group.bench_function("process: g=10,p=25", |b| b.iter(|| process_games(10, 25)));
    group.bench_function("process: g=100,p=25", |b| b.iter(|| process_games(100, 25)));
    group.bench_function("process: g=500,p=25", |b| b.iter(|| process_games(500, 25)));
    group.finish();
}

criterion_group!(benches, group_call);
criterion_main!(benches);
