//! Integration tests for turning hiscores responses into players

use osrs_hiscores::model::{ACTIVITY_COUNT, SKILL_COUNT};
use osrs_hiscores::{
    compute_level, parse_response, FetchOptions, LevelTable, ResponseFormat, ResponseParser,
    ACTIVITY_NAMES, SKILL_NAMES,
};

/// A maxed account: Overall 2277, every other skill at 200M except Defence
fn maxed_positional() -> String {
    let mut lines = vec!["1,2277,4600000000".to_string()];
    for id in 1..SKILL_COUNT {
        if id == 2 {
            lines.push("250000,99,13034431".to_string());
        } else {
            lines.push(format!("{},99,200000000", id));
        }
    }
    for id in 0..ACTIVITY_COUNT {
        match id {
            0 => lines.push("-1,-1".to_string()),
            3 => lines.push("1520,3421".to_string()),
            // unranked with a stray score
            5 => lines.push("-1,500".to_string()),
            _ => lines.push(format!("{},{}", id * 100, id)),
        }
    }
    lines.join("\n") + "\n"
}

fn maxed_structured() -> String {
    let skills: Vec<_> = SKILL_NAMES
        .iter()
        .enumerate()
        .map(|(id, name)| {
            if id == 0 {
                serde_json::json!({"id": 0, "name": name, "rank": 1, "level": 2277, "xp": 200_000_000i64})
            } else {
                serde_json::json!({"id": id, "name": name, "rank": id, "level": 99, "xp": 14_391_160})
            }
        })
        .collect();
    let activities: Vec<_> = ACTIVITY_NAMES
        .iter()
        .enumerate()
        .map(|(id, name)| {
            if id % 3 == 0 {
                serde_json::json!({"id": id, "name": name, "rank": -1, "score": -1})
            } else {
                serde_json::json!({"id": id, "name": name, "rank": id * 7, "score": id})
            }
        })
        .collect();
    serde_json::json!({"skills": skills, "activities": activities}).to_string()
}

/// Test 1: Overall keeps its reported level while siblings are recomputed
#[test]
fn test_overall_exempt_from_virtual_levels() {
    let options = FetchOptions::default().with_virtual_levels(true);
    let player =
        parse_response(&maxed_structured(), ResponseFormat::Structured, "Lynx Titan", &options)
            .unwrap();

    let overall = player.overall().unwrap();
    assert_eq!(overall.level, 2277);
    assert_eq!(overall.xp, 200_000_000);

    let attack = player.skill("Attack").unwrap();
    assert_eq!(attack.level, 100);
    assert_eq!(attack.level, compute_level(attack.xp, true));
}

/// Test 2: Without virtual levels, every level is passed through verbatim
#[test]
fn test_levels_pass_through_by_default() {
    let player = parse_response(
        &maxed_positional(),
        ResponseFormat::Positional,
        "Lynx Titan",
        &FetchOptions::default(),
    )
    .unwrap();

    assert!(player.skills()[1..].iter().all(|s| s.level == 99));
    assert_eq!(player.skills()[0].level, 2277);
}

/// Test 3: Virtual levels on the positional form
#[test]
fn test_positional_virtual_levels() {
    let options = FetchOptions::default().with_virtual_levels(true);
    let player =
        parse_response(&maxed_positional(), ResponseFormat::Positional, "Lynx Titan", &options)
            .unwrap();

    assert_eq!(player.skill("Overall").unwrap().level, 2277);
    assert_eq!(player.skill("Defence").unwrap().level, 99);
    assert_eq!(player.skill("Attack").unwrap().level, 126);
    assert_eq!(player.skill("Construction").unwrap().level, 126);
}

/// Test 4: Unranked activities always score zero
#[test]
fn test_unranked_scores_normalized() {
    let positional = parse_response(
        &maxed_positional(),
        ResponseFormat::Positional,
        "x",
        &FetchOptions::default(),
    )
    .unwrap();
    assert_eq!(positional.activities()[0].score, 0);
    assert_eq!(positional.activities()[5].rank, -1);
    assert_eq!(positional.activities()[5].score, 0);
    assert_eq!(positional.activity("Clue Scrolls (all)").unwrap().score, 3421);

    let structured = parse_response(
        &maxed_structured(),
        ResponseFormat::Structured,
        "x",
        &FetchOptions::default(),
    )
    .unwrap();
    for activity in structured.activities() {
        if activity.rank == -1 {
            assert_eq!(activity.score, 0, "{} kept a score", activity.name);
        }
    }
}

/// Test 5: Empty structured collections give an empty player
#[test]
fn test_structured_empty_collections() {
    for raw in [r#"{"skills": [], "activities": []}"#, "{}", r#"{"skills": null}"#] {
        let player =
            parse_response(raw, ResponseFormat::Structured, "Empty", &FetchOptions::default())
                .unwrap();
        assert!(player.skills().is_empty());
        assert!(player.activities().is_empty());
        assert_eq!(player.rsn(), "Empty");
    }
}

/// Test 6: Positional form with too few lines fails outright
#[test]
fn test_positional_short_response_fails() {
    let full = maxed_positional();
    for keep in [0, 1, SKILL_COUNT, SKILL_COUNT + ACTIVITY_COUNT - 1] {
        let raw: Vec<&str> = full.lines().take(keep).collect();
        let err = parse_response(
            &raw.join("\n"),
            ResponseFormat::Positional,
            "x",
            &FetchOptions::default(),
        )
        .unwrap_err();
        assert!(err.is_decode(), "{} lines should fail to decode", keep);
    }
}

/// Test 7: Malformed fields fail the whole parse
#[test]
fn test_positional_malformed_field_fails() {
    let raw = maxed_positional().replacen("1520,3421", "1520,many", 1);
    let err =
        parse_response(&raw, ResponseFormat::Positional, "x", &FetchOptions::default()).unwrap_err();
    assert!(err.is_decode());
    assert!(!err.is_transport());
}

/// Test 8: Garbage in either form is a decode failure
#[test]
fn test_unparsable_response() {
    for format in [ResponseFormat::Structured, ResponseFormat::Positional] {
        for raw in ["", "<html>Service unavailable</html>"] {
            let err = parse_response(raw, format, "x", &FetchOptions::default()).unwrap_err();
            assert!(err.is_decode());
        }
    }
}

/// Test 9: Parsing is stateless
#[test]
fn test_parse_is_idempotent() {
    let table = LevelTable::new();
    let parser = ResponseParser::new(&table);
    let options = FetchOptions::default().with_virtual_levels(true);

    let raw = maxed_positional();
    let first = parser
        .parse(&raw, ResponseFormat::Positional, "Zezima", &options)
        .unwrap();
    let second = parser
        .parse(&raw, ResponseFormat::Positional, "Zezima", &options)
        .unwrap();
    assert_eq!(first, second);

    let raw = maxed_structured();
    let first = parser
        .parse(&raw, ResponseFormat::Structured, "Zezima", &options)
        .unwrap();
    let second = parser
        .parse(&raw, ResponseFormat::Structured, "Zezima", &options)
        .unwrap();
    assert_eq!(first, second);
}

/// Test 10: Both forms of the same data agree on canonical order
#[test]
fn test_forms_share_canonical_order() {
    let player = parse_response(
        &maxed_structured(),
        ResponseFormat::Structured,
        "x",
        &FetchOptions::default(),
    )
    .unwrap();
    let names: Vec<_> = player.skills().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, SKILL_NAMES);

    let player = parse_response(
        &maxed_positional(),
        ResponseFormat::Positional,
        "x",
        &FetchOptions::default(),
    )
    .unwrap();
    let names: Vec<_> = player.activities().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ACTIVITY_NAMES);
}

/// Test 11: Players can be parsed from many threads at once
#[test]
fn test_concurrent_parsing() {
    let raw = maxed_positional();
    let options = FetchOptions::default().with_virtual_levels(true);
    let expected =
        parse_response(&raw, ResponseFormat::Positional, "x", &options).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| parse_response(&raw, ResponseFormat::Positional, "x", &options))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}
