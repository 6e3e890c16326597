use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fprules::{fp_growth_algorithm, PrefixTree, RuleGenerator, Transaction};
use rand::Rng;

/// Generate synthetic transactions over item ids `0..num_items`
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: How dense the data is (0.0-1.0)
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Vec<Transaction<usize>> {
    let mut rng = rand::thread_rng();

    (0..num_transactions)
        .map(|_| {
            let random_factor: f64 = rng.r#gen();
            let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
            let num_items_in_tx = num_items_in_tx.min(num_items);

            let mut items = Vec::with_capacity(num_items_in_tx);
            for _ in 0..num_items_in_tx {
                let density_check: f64 = rng.r#gen();
                if density_check < density {
                    items.push(rng.gen_range(0..num_items));
                }
            }
            Transaction::new(items)
        })
        .collect()
}

/// Benchmark FP-Growth with different dataset sizes
fn bench_fp_growth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 30, 6),
        ("large_1000tx", 1000, 40, 8),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| fp_growth_algorithm(black_box(tx), black_box(0.1)));
        });
    }

    group.finish();
}

/// Benchmark FP-Growth with different min_support thresholds
fn bench_fp_growth_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_min_support");

    let transactions = generate_transactions(1000, 30, 8, 0.7);
    let min_supports = vec![0.05, 0.1, 0.2, 0.3, 0.5];

    for &min_sup in &min_supports {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &min_sup,
            |b, &sup| {
                b.iter(|| fp_growth_algorithm(black_box(&transactions), black_box(sup)));
            },
        );
    }

    group.finish();
}

/// Cost of the per-branch tree copy plus conditioning
fn bench_conditional_tree(c: &mut Criterion) {
    let transactions = generate_transactions(1000, 30, 8, 0.7);
    let tree = PrefixTree::from_transactions(&transactions);

    c.bench_function("clone_and_condition", |b| {
        b.iter(|| {
            let mut conditional = black_box(&tree).clone();
            conditional.to_conditional_tree(black_box(&15));
            conditional
        });
    });
}

fn bench_rule_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_generation");

    let transactions = generate_transactions(1000, 30, 8, 0.7);
    let itemsets = fp_growth_algorithm(&transactions, 0.05);

    for &min_conf in &[0.3, 0.5, 0.8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.1}", min_conf)),
            &min_conf,
            |b, &conf| {
                b.iter(|| {
                    RuleGenerator::new(black_box(&itemsets))
                        .with_min_confidence(conf)
                        .generate()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fp_growth_scaling,
    bench_fp_growth_min_support,
    bench_conditional_tree,
    bench_rule_generation
);
criterion_main!(benches);
