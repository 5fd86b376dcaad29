use team_stats::config::{DEFAULT_MIN_MATCHES, MOMENTUM_MIN_MATCHES, MOMENTUM_WINDOW, RECENT_YEARS};
use team_stats::metrics;
use team_stats::{MatchDataset, StatsConfig};

fn main() -> team_stats::Result<()> {
    let config = StatsConfig::from_env();
    let dataset = MatchDataset::load_or_sample(&config)?;
    println!(
        "{} matches for {} from {:?}",
        dataset.matches().len(),
        dataset.subject(),
        dataset.source()
    );

    let summary = dataset.summary();
    println!("{}", serde_json::to_string_pretty(&summary).unwrap());

    let Some(kpis) = summary.as_metrics() else {
        println!("no usable matches");
        return Ok(());
    };
    println!("home advantage: {:+.1} pts", dataset.home_advantage());

    for group in dataset.by_opponent(DEFAULT_MIN_MATCHES).iter().take(5) {
        println!(
            "{:<28} {:>3} played  {:>5.1}% won  {:+.2} gd/match",
            group.key, group.matches_played, group.metrics.win_rate, group.metrics.avg_goal_difference
        );
    }

    if let Some(years) = dataset.years() {
        let (recent, historical) =
            metrics::split_recent(dataset.matches(), *years.end(), RECENT_YEARS);
        if let Some(comparison) = metrics::compare_periods(recent, historical) {
            println!("recent vs historical win rate: {:+.1}", comparison.win_rate_delta);
        }
    }

    let trend = dataset.trend(MOMENTUM_WINDOW);
    if let Some(last) = trend.last() {
        println!("rolling points ({MOMENTUM_WINDOW} matches): {:.2}", last.rolling_points);
    }
    if let Some(momentum) = metrics::momentum(dataset.matches(), MOMENTUM_MIN_MATCHES) {
        println!("{}", serde_json::to_string_pretty(&momentum).unwrap());
    }
    if let Some(pattern) = metrics::seasonal_pattern(dataset.matches()) {
        println!("{}", serde_json::to_string_pretty(&pattern).unwrap());
    }

    let profile = metrics::tactical_profile(kpis);
    println!("{}", serde_json::to_string_pretty(&profile).unwrap());
    let distribution = metrics::score_distribution(dataset.matches());
    println!("{}", serde_json::to_string_pretty(&distribution).unwrap());

    let assessment = metrics::assess(kpis, dataset.home_advantage());
    println!("{}", serde_json::to_string_pretty(&assessment).unwrap());
    println!(
        "{}",
        serde_json::to_string_pretty(&metrics::benchmark_gaps(kpis)).unwrap()
    );
    Ok(())
}
