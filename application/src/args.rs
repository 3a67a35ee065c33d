//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use common::Date;
use service::domain::property;

/// Booking assistant of the Ubud villa collection.
#[derive(Debug, Parser)]
#[command(name = "villa-booking", version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lists the villas available for booking.
    Villas,

    /// Prints the price breakdown of a stay.
    Quote(Stay),

    /// Prepares a reservation request for the concierge.
    Inquire(Inquiry),
}

/// Stay at a villa.
#[derive(Clone, Debug, clap::Args)]
pub struct Stay {
    /// ID of the villa.
    #[arg(long)]
    pub villa: property::Id,

    /// Arrival date (`YYYY-MM-DD`).
    #[arg(long)]
    pub check_in: Date,

    /// Departure date (`YYYY-MM-DD`).
    #[arg(long)]
    pub check_out: Date,
}

/// Reservation request.
#[derive(Clone, Debug, clap::Args)]
pub struct Inquiry {
    /// Stay being requested.
    #[command(flatten)]
    pub stay: Stay,

    /// Number of adults.
    #[arg(
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(1..),
    )]
    pub adults: u8,

    /// Number of children.
    #[arg(long, default_value_t = 0)]
    pub children: u8,

    /// First name of the guest.
    #[arg(long)]
    pub first_name: String,

    /// Last name of the guest.
    #[arg(long)]
    pub last_name: Option<String>,

    /// Email of the guest.
    #[arg(long)]
    pub email: String,

    /// Phone number of the guest.
    #[arg(long)]
    pub phone: Option<String>,

    /// Special requests of the guest.
    #[arg(long)]
    pub requests: Option<String>,

    /// Date considered as today (`YYYY-MM-DD`), the local date by default.
    #[arg(long)]
    pub today: Option<Date>,
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;
    use common::Date;

    use super::{Args, Command};

    #[test]
    fn parses_inquiry() {
        let args = Args::try_parse_from([
            "villa-booking",
            "inquire",
            "--villa",
            "1",
            "--check-in",
            "2026-03-10",
            "--check-out",
            "2026-03-13",
            "--first-name",
            "Jane",
            "--email",
            "jane@x.com",
        ])
        .unwrap();

        assert_eq!(args.config, "config.toml");
        let Command::Inquire(inquiry) = args.command else {
            panic!("expected `inquire` command");
        };
        assert_eq!(inquiry.stay.villa.to_string(), "1");
        assert_eq!(
            inquiry.stay.check_in,
            Date::from_calendar_date(2026, 3, 10).unwrap(),
        );
        assert_eq!(inquiry.adults, 2);
        assert_eq!(inquiry.children, 0);
        assert!(inquiry.phone.is_none());
        assert!(inquiry.today.is_none());
    }

    #[test]
    fn parses_global_config() {
        let args =
            Args::try_parse_from(["villa-booking", "villas", "-c", "dev.toml"])
                .unwrap();

        assert_eq!(args.config, "dev.toml");
        assert!(matches!(args.command, Command::Villas));
    }

    #[test]
    fn rejects_invalid_input() {
        for argv in [
            &["villa-booking", "quote", "--villa", "1"][..],
            &[
                "villa-booking",
                "quote",
                "--villa",
                "villa one",
                "--check-in",
                "2026-03-10",
                "--check-out",
                "2026-03-13",
            ],
            &[
                "villa-booking",
                "quote",
                "--villa",
                "1",
                "--check-in",
                "10/03/2026",
                "--check-out",
                "2026-03-13",
            ],
        ] {
            assert!(Args::try_parse_from(argv).is_err(), "{argv:?}");
        }
    }

    #[test]
    fn rejects_zero_adults() {
        let res = Args::try_parse_from([
            "villa-booking",
            "inquire",
            "--villa",
            "1",
            "--check-in",
            "2026-03-10",
            "--check-out",
            "2026-03-13",
            "--adults",
            "0",
            "--first-name",
            "Jane",
            "--email",
            "jane@x.com",
        ]);

        assert!(res.is_err());
    }
}
