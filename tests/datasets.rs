use discrete_auction::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

fn run_dataset(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name);
    let file = File::open(&path).unwrap();

    let auction = DiscreteAuction::default();
    let batch = auction.read(BufReader::new(file)).unwrap();
    auction.clear_batch(&batch).to_string()
}

#[test]
fn test_dataset_01_no_crossing() {
    assert_eq!(run_dataset("dataset_01.txt"), "0 n/a");
}

#[test]
fn test_dataset_02_mixed_and_invalid_lines() {
    assert_eq!(run_dataset("dataset_02.txt"), "80 15.35");
}

#[test]
fn test_dataset_03_single_best_level() {
    assert_eq!(run_dataset("dataset_03.txt"), "90 10.20");
}

#[test]
fn test_dataset_04_tie_rounds_up() {
    // (5005 + 5010 + 5000 + 5010) / 4 = 5006.25 -> 5007
    assert_eq!(run_dataset("dataset_04.txt"), "3 50.07");
}

#[test]
fn test_line_limit_applies_to_datasets() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/dataset_03.txt");
    let auction = DiscreteAuctionBuilder::new()
        .with_max_orders(5)
        .build(Arc::new(NoOpEventHandler))
        .unwrap();

    // Only the four sells and the 60 @ 10.30 bid are read
    let batch = auction
        .read(BufReader::new(File::open(path).unwrap()))
        .unwrap();
    assert_eq!(batch.sells.len(), 4);
    assert_eq!(batch.buys, vec![Order::buy(60, 1030)]);
    // 10.30 and 10.20 both reach 60: (1030 + 1030 + 1020 + 1030) / 4 = 1027.5 -> 1028
    assert_eq!(auction.clear_batch(&batch).to_string(), "60 10.28");
}
