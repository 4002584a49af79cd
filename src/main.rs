use csv::Trim;
use fraud_screen::screening::{
    ClientConfig, PredictionClient, PredictionSession, VerdictRecord, screen_records,
};
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::{env, error::Error, ffi::OsString, fs::File};

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().env().init()?;

    log::debug!("Application started");

    let config = config_from_env()?;
    log::debug!("Prediction service configured: {config:?}");

    let mut session = PredictionSession::new(PredictionClient::new(config));

    log::debug!("Transaction screening: Starting");
    let records = screen_transactions(&mut session)?;
    log::debug!("Transaction screening: Done");

    log::debug!("Exporting verdict report to stdout: Started");
    write_to_std_out(&records)?;
    log::debug!("Exporting verdict report to stdout: Done");

    log::debug!("Application finished");

    Ok(())
}

fn config_from_env() -> Result<ClientConfig, Box<dyn Error>> {
    match env::var("PREDICTION_API_URL") {
        Ok(url) => Ok(ClientConfig::new(url)),
        Err(_) => Err(From::from(
            "PREDICTION_API_URL must point to the prediction service",
        )),
    }
}

fn get_first_arg() -> Result<OsString, Box<dyn Error>> {
    match env::args_os().nth(1) {
        None => Err(From::from("expected 1 argument, but got none")),
        Some(file_path) => Ok(file_path),
    }
}

fn screen_transactions(
    session: &mut PredictionSession,
) -> Result<Vec<VerdictRecord>, Box<dyn Error>> {
    let file_path = get_first_arg()?;
    let path = PathBuf::from(file_path);
    log::debug!("Extracted filepath from args: {path:?}");

    let file: File = File::open(path)?;
    let rdr = csv::ReaderBuilder::new().trim(Trim::All).from_reader(file);

    Ok(screen_records(rdr, session)?)
}

pub fn write_to_std_out(records: &[VerdictRecord]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());

    log::debug!("Starting verdict record serialisation");
    for record in records {
        log::debug!("Serialising verdict record: {record:?}");
        wtr.serialize(record)?;
    }

    log::debug!("Verdict record serialisation done -> Flushing to stdout");
    wtr.flush()?;

    Ok(())
}
