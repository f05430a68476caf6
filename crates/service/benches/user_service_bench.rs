use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::domain::User;
use service::repository::memory::InMemoryUserRepository;
use service::UserService;

fn bench_find_by_id(c: &mut Criterion) {
    let repo = Arc::new(InMemoryUserRepository::with_users((0..1_000).map(|i| User::new(i, format!("user{i}")))));
    let svc = UserService::new(repo);
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("user_service_find_by_id", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.find_by_id(500)).unwrap();
        });
    });
}

fn bench_save(c: &mut Criterion) {
    let svc = UserService::new(Arc::new(InMemoryUserRepository::default()));
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("user_service_save", |b| {
        b.iter(|| {
            rt.block_on(svc.save(User::new(1, "Bench"))).unwrap();
        });
    });
}

criterion_group!(benches, bench_find_by_id, bench_save);
criterion_main!(benches);
