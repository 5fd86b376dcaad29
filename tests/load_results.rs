use std::io::Write;

use tempfile::NamedTempFile;

use team_stats::metrics;
use team_stats::{DataSource, GroupKey, MatchDataset, MatchResult, StatsConfig, StatsError};

const HEADER: &str = "date,home_team,away_team,home_score,away_score,tournament,city,country,neutral";

fn write_csv(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    write!(file, "{body}").unwrap();
    file.flush().unwrap();
    file
}

fn config_for(file: &NamedTempFile) -> StatsConfig {
    StatsConfig::default().with_data_path(file.path())
}

#[test]
fn test_load_normalizes_subject_rows() {
    let file = write_csv(
        "2021-01-01,France,Germany,2,1,Friendly,Paris,France,FALSE\n\
         2021-02-01,Spain,France,3,1,,Madrid,Spain,FALSE\n\
         2021-03-01,Italy,Spain,1,1,Friendly,Rome,Italy,FALSE\n\
         2021-04-01,france ,Wales,,,Friendly,Caen,France,FALSE\n\
         bad-date,France,Wales,1,0,Friendly,Caen,France,FALSE\n",
    );
    let dataset = MatchDataset::load(&config_for(&file)).unwrap();

    assert_eq!(dataset.source(), &DataSource::File(file.path().to_path_buf()));
    let matches = dataset.matches();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].opponent, "Germany");
    assert_eq!(matches[0].result, MatchResult::Win);
    assert_eq!(matches[1].opponent, "Spain");
    assert_eq!(matches[1].competition, "Friendly");
    assert_eq!(matches[1].goal_difference, -2);

    let summary = dataset.summary().into_metrics().unwrap();
    assert!((summary.win_rate - 50.0).abs() < 1e-9);
    assert!((summary.avg_goals_scored - 1.5).abs() < 1e-9);
    assert!((summary.avg_goals_conceded - 2.0).abs() < 1e-9);
    assert_eq!(summary.clean_sheets, 0);
}

#[test]
fn test_float_scores_and_datetimes_are_accepted() {
    let file = write_csv(
        "2019-06-07T21:00:00,France,Korea Republic,4.0,0.0,FIFA World Cup,Paris,France,FALSE\n\
         2019-06-28 21:00:00,France,USA,1.0,2.0,FIFA World Cup,Paris,France,TRUE\n",
    );
    let dataset = MatchDataset::load(&config_for(&file)).unwrap();
    assert_eq!(dataset.matches().len(), 2);

    let venues = dataset.grouped(GroupKey::Venue, 1);
    let keys: Vec<_> = venues.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["Home", "Neutral"]);
}

#[test]
fn test_no_subject_matches_is_reported_then_sampled() {
    let file = write_csv("2021-03-01,Italy,Spain,1,1,Friendly,Rome,Italy,FALSE\n");
    let config = config_for(&file);

    let err = MatchDataset::load(&config).unwrap_err();
    assert!(matches!(err, StatsError::NoSubjectData { .. }));

    let dataset = MatchDataset::load_or_sample(&config).unwrap();
    assert_eq!(
        dataset.source(),
        &DataSource::Sample {
            seed: config.sample_seed
        }
    );
    assert!(dataset.matches().len() > 100);
}

#[test]
fn test_missing_columns_fall_back_to_sample() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,home_team,away_team,home_score,away_score").unwrap();
    writeln!(file, "2021-01-01,France,Germany,2,1").unwrap();
    file.flush().unwrap();
    let config = config_for(&file);

    assert!(matches!(
        MatchDataset::load(&config),
        Err(StatsError::MissingColumns { .. })
    ));
    let dataset = MatchDataset::load_or_sample(&config).unwrap();
    assert!(matches!(dataset.source(), DataSource::Sample { .. }));
}

#[test]
fn test_sample_dataset_supports_every_view() {
    let dataset = MatchDataset::sample(&StatsConfig::default()).unwrap();
    let matches = dataset.matches();

    assert!(dataset.summary().as_metrics().is_some());
    assert!(!dataset.by_opponent(3).is_empty());
    assert_eq!(dataset.trend(10).len(), matches.len());
    assert!(metrics::momentum(matches, 15).is_some());
    assert!(metrics::seasonal_pattern(matches).is_some());
    assert!(metrics::project_win_rate(matches).is_some());

    let years = dataset.years().unwrap();
    let (recent, historical) = metrics::split_recent(matches, *years.end(), 2);
    assert!(metrics::compare_periods(recent, historical).is_some());
}

#[test]
fn test_opponent_spellings_group_together() {
    let file = write_csv(
        "2021-01-01,France,Germany,2,1,Friendly,Paris,France,FALSE\n\
         2021-06-01,GERMANY,france,1,1,Friendly,Berlin,Germany,FALSE\n",
    );
    let dataset = MatchDataset::load(&config_for(&file)).unwrap();

    let opponents = dataset.by_opponent(2);
    assert_eq!(opponents.len(), 1);
    assert_eq!(opponents[0].key, "Germany");
    assert_eq!(opponents[0].matches_played, 2);
}
