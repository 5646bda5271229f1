use idvec_bench::{BenchConfig, run};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let base = BenchConfig::from_env();
    let configs = vec![
        base.clone(),
        BenchConfig {
            churn_ratio: 0.9,
            ..base
        },
    ];
    run(&configs)
}
