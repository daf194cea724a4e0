use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use custom_datetime::{Adapter, CustomDateTime, FormatError, Formats, ScopedFormats};
use serde::{Deserialize, Serialize};

fn day_month_year_hour_minute() -> ScopedFormats {
    Formats::default().with_date_time("%d•%m•%Y %H:%M").scoped()
}

fn november_tenth_1337() -> CustomDateTime {
    CustomDateTime::from(Utc.with_ymd_and_hms(2009, 11, 10, 13, 37, 0).unwrap())
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Element {
    #[serde(rename = "CreatedAt")]
    created_at: CustomDateTime,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Element")]
struct AttrElement {
    #[serde(rename = "@created_at")]
    created: CustomDateTime,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Element")]
struct TextElement {
    #[serde(rename = "$text")]
    created_at: CustomDateTime,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Record {
    created_at: CustomDateTime,
}

#[test]
fn test_render_and_parse() {
    let _formats = day_month_year_hour_minute();
    let value = november_tenth_1337();

    assert_eq!(value.to_string(), "10•11•2009 13:37");
    assert_eq!(CustomDateTime::parse("10•11•2009 13:37").unwrap(), value);
}

#[test]
fn test_default_format_keeps_offset() {
    let _formats = Formats::default().scoped();
    let offset = FixedOffset::east_opt(9 * 3600).unwrap();
    let value = CustomDateTime::from(offset.with_ymd_and_hms(2009, 11, 10, 22, 37, 0).unwrap());

    assert_eq!(value.to_string(), "2009-11-10T22:37:00+09:00");

    let parsed = CustomDateTime::parse("2009-11-10T22:37:00+09:00").unwrap();
    assert_eq!(parsed, value);
    assert_eq!(parsed.instant().offset(), &offset);
    assert_eq!(parsed, november_tenth_1337());
}

#[test]
fn test_default_format_drops_subseconds() {
    let _formats = Formats::default().scoped();
    let naive = NaiveDate::from_ymd_opt(2009, 11, 10)
        .unwrap()
        .and_hms_milli_opt(13, 37, 0, 250)
        .unwrap();
    let value = CustomDateTime::from_naive_utc(naive);

    assert_eq!(value.to_string(), "2009-11-10T13:37:00+00:00");
    assert_eq!(CustomDateTime::parse(&value.to_string()).unwrap(), value.narrowed());
    assert_eq!(value.narrowed(), november_tenth_1337());
}

#[test]
fn test_parse_failure() {
    let _formats = day_month_year_hour_minute();
    let err = CustomDateTime::parse("10•11•2009").unwrap_err();
    assert!(matches!(err, FormatError::Mismatch { kind: "date-time", .. }));
    assert_eq!(err.kind(), "date-time");
}

#[test]
fn test_xml_element() {
    let _formats = day_month_year_hour_minute();
    let element = Element {
        created_at: november_tenth_1337(),
    };

    let want = "<Element><CreatedAt>10•11•2009 13:37</CreatedAt></Element>";
    assert_eq!(quick_xml::se::to_string(&element).unwrap(), want);

    let decoded: Element = quick_xml::de::from_str(want).unwrap();
    assert_eq!(decoded, element);
}

#[test]
fn test_xml_attribute() {
    let _formats = day_month_year_hour_minute();
    let element = AttrElement {
        created: november_tenth_1337(),
    };

    let got = quick_xml::se::to_string(&element).unwrap();
    assert!(got.contains(r#"created_at="10•11•2009 13:37""#));

    let decoded: AttrElement =
        quick_xml::de::from_str(r#"<Element created_at="10•11•2009 13:37"></Element>"#).unwrap();
    assert_eq!(decoded, element);
}

#[test]
fn test_xml_text_and_cdata() {
    let _formats = day_month_year_hour_minute();
    let element = TextElement {
        created_at: november_tenth_1337(),
    };

    let want = "<Element>10•11•2009 13:37</Element>";
    assert_eq!(quick_xml::se::to_string(&element).unwrap(), want);

    let decoded: TextElement = quick_xml::de::from_str(want).unwrap();
    assert_eq!(decoded, element);

    let decoded: TextElement = quick_xml::de::from_str("<Element><![CDATA[10•11•2009 13:37]]></Element>").unwrap();
    assert_eq!(decoded, element);
}

#[test]
fn test_json() {
    let _formats = day_month_year_hour_minute();
    let record = Record {
        created_at: november_tenth_1337(),
    };

    let want = r#"{"created_at":"10•11•2009 13:37"}"#;
    assert_eq!(serde_json::to_string(&record).unwrap(), want);

    let decoded: Record = serde_json::from_str(want).unwrap();
    assert_eq!(decoded, record);

    let result: Result<Record, _> = serde_json::from_str(r#"{"created_at":"13:37 10•11•2009"}"#);
    assert!(result.is_err());
}

#[test]
fn test_yaml() {
    let _formats = day_month_year_hour_minute();
    let record = Record {
        created_at: november_tenth_1337(),
    };

    let encoded = serde_yaml::to_string(&record).unwrap();
    let decoded: Record = serde_yaml::from_str(&encoded).unwrap();
    assert_eq!(decoded, record);

    let decoded: Record = serde_yaml::from_str("created_at: 10•11•2009 13:37\n").unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn test_toml() {
    let _formats = day_month_year_hour_minute();
    let record = Record {
        created_at: november_tenth_1337(),
    };

    let encoded = toml::to_string(&record).unwrap();
    assert!(encoded.contains("10•11•2009 13:37"));

    let decoded: Record = toml::from_str(&encoded).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn test_generic_text() {
    let _formats = day_month_year_hour_minute();
    let value = november_tenth_1337();

    assert_eq!(value.encode_text(), "10•11•2009 13:37".as_bytes());
    assert_eq!(CustomDateTime::decode_text("10•11•2009 13:37".as_bytes()).unwrap(), value);
}

#[test]
fn test_zero_value() {
    let value = CustomDateTime::default();
    assert_eq!(value.instant().to_rfc3339(), "1970-01-01T00:00:00+00:00");
}
