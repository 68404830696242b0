//! Demo binary: matches each sample American city to its nearest
//! European capital and prints one line per match.

use log::{error, info};

use geomatch::error::MatchError;
use geomatch::location::AsLocation;
use geomatch::nearest::match_nearest;
use geomatch::samples::{AMERICAN_CITIES, EUROPEAN_CITIES};

fn main() {
    // Configure logging
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .ok();

    match do_main() {
        Ok(_) => info!("Process finished OK"),
        Err(err) => {
            error!("Process finished with an error: {}", err);
            std::process::exit(1);
        }
    };
}

fn do_main() -> Result<(), MatchError> {
    info!(
        "Matching {} American cities against {} European capitals",
        AMERICAN_CITIES.len(),
        EUROPEAN_CITIES.len()
    );

    println!("Closest European cities to each American city:");
    for result in match_nearest(&AMERICAN_CITIES, &EUROPEAN_CITIES)? {
        println!(
            "{} {} -> {} {} [{:.2} km]",
            result.source.label(),
            result.source.as_location().label(),
            result.target.label(),
            result.target.as_location().label(),
            result.distance_km
        );
    }

    Ok(())
}
