// command line interface

use crate::core::{Directory, DoctorFilter, HealthBot, HospitalFilter, Listing};
use crate::output::Output;
use crate::Server;
use clap::{Parser, Subcommand};
use miette::Result;

#[derive(Parser)]
#[command(name = "medibud", about = "Find hospitals, doctors and medical resources")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// start as http server
    Serve {
        /// port number
        #[arg(long, short, default_value = "3000")]
        port: u16,

        /// host to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// ask the health assistant a one-off question
    Ask {
        /// your health query
        question: Vec<String>,
    },

    /// list hospitals
    Hospitals {
        /// substring to match against name or location
        #[arg(long, short)]
        search: Option<String>,

        /// only hospitals offering the given specialty
        #[arg(long)]
        specialty: Option<String>,

        /// only hospitals with 24/7 emergency services
        #[arg(long, short)]
        emergency_only: bool,

        /// raw json output
        #[arg(long)]
        json: bool,
    },

    /// list doctors
    Doctors {
        /// substring to match against the doctor's name
        #[arg(long, short)]
        search: Option<String>,

        /// exact specialty, e.g. "Cardiologist"
        #[arg(long)]
        specialty: Option<String>,

        /// raw json output
        #[arg(long)]
        json: bool,
    },

    /// list bookable medical resources
    Services {
        /// raw json output
        #[arg(long)]
        json: bool,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { port, host }) => Ok(Server::run(&host, port).await?),

        Some(Commands::Ask { question }) => {
            let question = question.join(" ");
            if question.trim().is_empty() {
                return Err(miette::miette!("nothing to ask"));
            }

            let bot = HealthBot::new();
            let reply = bot.respond(&question).await?;
            println!("{reply}");
            Ok(())
        }

        Some(Commands::Hospitals {
            search,
            specialty,
            emergency_only,
            json,
        }) => {
            let directory = Directory::new();
            let filter = HospitalFilter {
                search,
                specialty,
                emergency_only,
            };
            let listing = Listing::from_hospitals(&directory.search_hospitals(&filter));

            if json {
                Output::raw(&listing);
            } else {
                Output::pretty("Hospitals in Kanpur", &listing);
            }
            Ok(())
        }

        Some(Commands::Doctors {
            search,
            specialty,
            json,
        }) => {
            let directory = Directory::new();
            let filter = DoctorFilter { search, specialty };
            let listing = Listing::from_doctors(&directory.search_doctors(&filter));

            if json {
                Output::raw(&listing);
            } else {
                Output::pretty("Our specialists", &listing);
            }
            Ok(())
        }

        Some(Commands::Services { json }) => {
            let directory = Directory::new();
            let listing = Listing::from_services(directory.services());

            if json {
                Output::raw(&listing);
            } else {
                Output::pretty("Medical services", &listing);
            }
            Ok(())
        }

        // no subcommand: interactive tui
        None => Ok(crate::tui::run().await?),
    }
}
