use anyhow::{Context, Result};
use custom_datetime::{Adapter, Config, CustomDate, CustomDateTime, CustomTime};

fn usage() {
    eprintln!("Usage:");
    eprintln!("  custom-datetime now                      Render the current instant with every format");
    eprintln!("  custom-datetime parse <kind> <text>      Parse text as a date, date-time or time");
    eprintln!("  custom-datetime generate-config [path]   Write a default configuration file");
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some("generate-config") = args.first().map(String::as_str) {
        let path = match args.get(1) {
            Some(path) => path.into(),
            None => Config::user_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = Config::load()?;
    config.apply()?;

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["now"] => {
            let now = chrono::Local::now();
            println!("date:      {}", CustomDate::from(now));
            println!("date_time: {}", CustomDateTime::from(now));
            println!("time:      {}", CustomTime::from(now));
        }
        ["parse", kind, text] => {
            let instant = match *kind {
                "date" => CustomDate::parse(text).map(|value| value.instant()),
                "date_time" | "date-time" => CustomDateTime::parse(text).map(|value| value.instant()),
                "time" => CustomTime::parse(text).map(|value| value.instant()),
                other => anyhow::bail!("Unknown kind '{}', expected date, date_time or time", other),
            }
            .with_context(|| format!("Failed to parse '{}'", text))?;
            println!("{}", instant.to_rfc3339());
        }
        _ => usage(),
    }

    Ok(())
}
