use log::{info, Level};
use protoenum::schema::Schema;
use protoenum::ProtoEnum;
use std::env;
use std::io::Read;
use std::str::FromStr;

fn log_level() -> Level
{
    env::var("PROTOENUM_LOG")
        .ok()
        .and_then(|level| Level::from_str(&level).ok())
        .unwrap_or(Level::Warn)
}

fn main() -> Result<(), Box<dyn std::error::Error>>
{
    simple_logger::init_with_level(log_level())?;

    let data: Vec<String> = env::args()
        .skip(1)
        .map(|f| {
            let mut file = std::fs::File::open(&f)?;
            let mut s = String::new();
            file.read_to_string(&mut s)?;
            info!("Read {}", f);
            Ok(s)
        })
        .collect::<Result<_, std::io::Error>>()?;

    let schema = Schema::parse(&data)?;
    for e in schema.enums() {
        let registry = e.to_registry(|v| v.name().to_lowercase())?;
        let default = registry.get_default().ok().map(|d| d.code());

        println!("{}", e.full_name);
        for entry in &registry {
            let marker = if Some(entry.code()) == default { " (default)" } else { "" };
            println!("  {:>6} {} => {}{}", entry.code(), entry.name(), entry.plain(), marker);
        }
    }

    Ok(())
}
