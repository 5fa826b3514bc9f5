use chrono::{NaiveDate, TimeZone, Utc};
use slate_core::placement::Placement;
use slate_core::types::ContainerId;
use slate_core::{Capacity, ContentItem, ContentType, Slate, SlateBuilder};

fn item(id: &str, content_type: &str, trending: bool, t: i64) -> ContentItem {
    ContentItem::new(id, content_type, trending, Utc.timestamp_opt(t, 0).unwrap())
}

fn scenario_slate() -> Slate {
    let pool = vec![
        item("n1", "News", false, 1),
        item("n2", "News", true, 5),
        item("n3", "News", false, 3),
        item("e1", "ExpertOpinion", false, 2),
    ];
    SlateBuilder::default().build(&pool, Capacity::new(3)).unwrap()
}

#[test]
fn golden_slate_serialization() {
    let slate = scenario_slate();
    let json = serde_json::to_string_pretty(&slate).unwrap();

    let expected = r#"{
  "version": "sha256:afec6ad3e9b3325b2c600b853c40d894acbda7ee857b2a2928ece81a729c47f3",
  "entries": [
    {
      "id": "n2",
      "content_type": "News",
      "rank": 1,
      "round": "diversity"
    },
    {
      "id": "e1",
      "content_type": "ExpertOpinion",
      "rank": 2,
      "round": "diversity"
    },
    {
      "id": "n3",
      "content_type": "News",
      "rank": 3,
      "round": "backfill"
    }
  ],
  "allocation": {
    "capacity": 3,
    "items_considered": 4,
    "items_selected": 3,
    "diversity_picks": 2,
    "backfill_picks": 1,
    "items_excluded_by_capacity": 1,
    "exact_fit": false
  }
}"#;

    assert_eq!(json.trim(), expected.trim(), "Golden snapshot mismatch");

    let roundtrip: Slate = serde_json::from_str(&json).unwrap();
    assert_eq!(roundtrip, slate);
}

#[test]
fn golden_content_item_serialization() {
    let item = ContentItem::new(
        "post-17",
        "Podcast",
        true,
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
    );

    let json = serde_json::to_string(&item).unwrap();
    assert_eq!(
        json,
        r#"{"id":"post-17","content_type":"Podcast","is_trending":true,"published_at":"2024-03-01T12:30:00Z"}"#
    );

    let parsed: ContentItem = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.content_type, ContentType::Other("Podcast".to_string()));

    let news: ContentItem = serde_json::from_str(
        r#"{"id":"n","content_type":"News","is_trending":false,"published_at":"2024-03-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(news.content_type, ContentType::News);
}

#[test]
fn golden_placement_serialization() {
    let slate = scenario_slate();
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let placement = Placement::from_slate(ContainerId::from("sector/energy"), date, &slate);

    let json = serde_json::to_string(&placement).unwrap();

    let container_pos = json.find("\"container\":").unwrap();
    let date_pos = json.find("\"publish_date\":").unwrap();
    let version_pos = json.find("\"slate_version\":").unwrap();
    let ranks_pos = json.find("\"ranks\":").unwrap();

    assert!(container_pos < date_pos);
    assert!(date_pos < version_pos);
    assert!(version_pos < ranks_pos);

    assert!(json.contains(r#""publish_date":"2024-05-01""#));
    assert!(json.contains(r#"{"item_id":"n2","rank":1}"#));
    assert_eq!(placement.computed_version(), slate.version);
}
