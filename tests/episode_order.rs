use std::collections::HashSet;

use yazikit::episodes::{episode_names, episode_order, render_episode_names, EpisodeRange};

// Every integer in [start, end] appears exactly once, for a spread of ranges
// including negatives, zero and ranges that straddle decade boundaries.
#[test]
fn output_is_permutation_of_range() {
    let bounds = [-25i64, -11, -10, -1, 0, 1, 2, 9, 10, 11, 19, 20, 99, 100, 101, 250];
    for &start in &bounds {
        for &end in &bounds {
            let order = episode_order(start, end);
            if start > end {
                assert!(order.is_empty(), "{start}..={end} should be empty");
                continue;
            }
            let expected_len = (end - start + 1) as usize;
            assert_eq!(order.len(), expected_len, "{start}..={end} length");
            let distinct: HashSet<i64> = order.iter().copied().collect();
            assert_eq!(distinct.len(), expected_len, "{start}..={end} has duplicates");
            let range = EpisodeRange::new(start, end);
            assert!(
                order.iter().all(|&n| range.contains(n)),
                "{start}..={end} emitted out-of-range value"
            );
        }
    }
}

#[test]
fn one_to_twelve_names() {
    let expected = [
        "01.mp4", "10.mp4", "11.mp4", "12.mp4", "02.mp4", "03.mp4", "04.mp4", "05.mp4", "06.mp4",
        "07.mp4", "08.mp4", "09.mp4",
    ];
    assert_eq!(episode_names(1, 12, "mp4"), expected);
    assert_eq!(render_episode_names(1, 12, "mp4"), expected.join("\n"));
}

#[test]
fn one_to_ten_names() {
    assert_eq!(
        render_episode_names(1, 10, "mp4"),
        "01.mp4\n10.mp4\n02.mp4\n03.mp4\n04.mp4\n05.mp4\n06.mp4\n07.mp4\n08.mp4\n09.mp4"
    );
}

#[test]
fn single_and_inverted() {
    assert_eq!(episode_names(5, 5, "txt"), vec!["05.txt"]);
    assert!(episode_names(12, 1, "mp4").is_empty());
}

#[test]
fn repeated_calls_are_identical() {
    let first = render_episode_names(3, 140, "mkv");
    for _ in 0..3 {
        assert_eq!(render_episode_names(3, 140, "mkv"), first);
    }
}

#[test]
fn base_number_is_followed_by_its_decade() {
    let order = episode_order(1, 35);
    for base in 1..=2i64 {
        let pos = order.iter().position(|&n| n == base).unwrap();
        let decade: Vec<i64> = (base * 10..base * 10 + 10).collect();
        assert_eq!(&order[pos + 1..pos + 11], decade.as_slice(), "decade of {base}");
    }
}

#[test]
fn negative_start_keeps_ascending_prefix() {
    // Windows of negative bases only cover numbers already emitted, and 0's
    // window holds the units that come next anyway.
    let order = episode_order(-3, 2);
    assert_eq!(order, vec![-3, -2, -1, 0, 1, 2]);
    assert_eq!(episode_names(-3, -2, "mp4"), vec!["-3.mp4", "-2.mp4"]);
}
