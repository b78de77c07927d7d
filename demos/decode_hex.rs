// ABOUTME: Command line demo that decodes hex-encoded SMS PDUs and prints their fields
// ABOUTME: Accepts one or more PDUs as arguments; --trace shows per-field decoder events

use argh::FromArgs;
use sms_pdu::datatypes::ValidityPeriod;
use sms_pdu::{DecodeOptions, Decoder, SmsUnit, TimezoneSign};
use std::error::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Decode SMS-SUBMIT / SMS-DELIVER PDUs given as hex strings
#[derive(FromArgs)]
struct CliArgs {
    /// log decoder events down to trace level
    #[argh(switch, short = 't')]
    trace: bool,

    /// treat the timezone octet as unsigned, like older decoders
    #[argh(switch)]
    ignore_timezone_sign: bool,

    /// the PDUs to decode, starting at the first octet
    #[argh(positional)]
    pdus: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli_args: CliArgs = argh::from_env();

    let level = if cli_args.trace { Level::TRACE } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let timezone_sign = if cli_args.ignore_timezone_sign {
        TimezoneSign::Ignore
    } else {
        TimezoneSign::Apply
    };
    let decoder = Decoder::new(DecodeOptions::new().timezone_sign(timezone_sign));

    for pdu in &cli_args.pdus {
        match decoder.decode_hex(pdu) {
            Ok(unit) => print_unit(&unit),
            Err(e) => eprintln!("{pdu}: {e}"),
        }
    }

    Ok(())
}

fn print_unit(unit: &SmsUnit) {
    println!("type:      {}", unit.message_type());
    match unit {
        SmsUnit::Submit(submit) => {
            match &submit.sender {
                Some(sender) => println!("sender:    {sender}"),
                None => println!("sender:    (none)"),
            }
            match &submit.service_centre_timestamp {
                Some(timestamp) => println!("timestamp: {timestamp}"),
                None => println!("timestamp: (none)"),
            }
        }
        SmsUnit::Deliver(deliver) => {
            println!("reference: {}", deliver.message_reference);
            match &deliver.recipient {
                Some(recipient) => println!("recipient: {recipient}"),
                None => println!("recipient: (none)"),
            }
            if deliver.validity_period != ValidityPeriod::NotPresent {
                println!("validity:  {}", deliver.validity_period);
            }
        }
    }
    let data_coding = match unit {
        SmsUnit::Submit(submit) => submit.data_coding,
        SmsUnit::Deliver(deliver) => deliver.data_coding,
    };
    println!("coding:    {data_coding}");
    println!("text:      {}", unit.text());
    println!();
}
