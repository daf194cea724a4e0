use custom_datetime::{logger, Adapter, CustomDate, CustomDateTime, CustomTime, Formats};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "Meeting")]
struct Meeting {
    #[serde(rename = "@day")]
    day: CustomDate,
    starts: CustomTime,
    booked_at: CustomDateTime,
}

fn main() -> anyhow::Result<()> {
    logger::init(log::LevelFilter::Debug)?;

    // Configure once at startup, before anything is encoded
    Formats::default()
        .with_date("%d•%m•%Y")
        .with_time("%H:%M")
        .with_date_time("%d•%m•%Y %H:%M %:z")
        .install();

    let meeting = Meeting {
        day: CustomDate::parse("10•11•2009")?,
        starts: CustomTime::parse("13:37")?,
        booked_at: CustomDateTime::from(chrono::Local::now()),
    };

    println!("XML:  {}", quick_xml::se::to_string(&meeting)?);
    println!("JSON: {}", serde_json::to_string(&meeting)?);
    println!("YAML:\n{}", serde_yaml::to_string(&meeting)?);
    println!("TOML:\n{}", toml::to_string(&meeting)?);

    let decoded: Meeting = serde_json::from_str(&serde_json::to_string(&meeting)?)?;
    println!("Decoded day: {}", decoded.day.date());

    match serde_json::from_str::<Meeting>(r#"{"day":"2009-11-10","starts":"13:37","booked_at":"x"}"#) {
        Ok(_) => println!("Unexpectedly decoded"),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
