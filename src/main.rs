//! Terminal client for the electronic-voting demo: register voters, cast
//! votes, and follow the ranked tally across the three backend services.

use std::time::Duration;

use clap::{Parser, Subcommand};
use log::{error, info};

use evoting_client::api::Services;
use evoting_client::model::{Cin, RankedEntry, Scoreboard};
use evoting_client::workflow::{
    Notice, RegistrationFlow, RegistrationForm, ResultsFlow, VotingFlow,
};
use evoting_client::Config;

#[derive(Debug, Parser)]
#[command(name = "evote", about = "Client for the electronic-voting demo services")]
struct Args {
    /// Base URL of the voter registry service.
    #[arg(long, env = "EVOTE_VOTER_URL", default_value = "http://localhost:8081")]
    voter_url: String,

    /// Base URL of the ballot service.
    #[arg(long, env = "EVOTE_BALLOT_URL", default_value = "http://localhost:8082")]
    ballot_url: String,

    /// Base URL of the results service.
    #[arg(long, env = "EVOTE_RESULTS_URL", default_value = "http://localhost:8083")]
    results_url: String,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Register a new voter.
    Register {
        /// National identity-card number, e.g. AB123456.
        #[arg(long)]
        cin: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        /// ISO date, e.g. 1990-04-02.
        #[arg(long)]
        date_of_birth: String,
        #[arg(long)]
        address: String,
    },
    /// Cast a vote for a candidate on the active proposal.
    Vote {
        /// CIN of the eligible voter casting the ballot.
        #[arg(long)]
        voter: String,
        /// Candidate id to vote for.
        #[arg(long)]
        candidate: u32,
        /// Proposal id; may be omitted when exactly one proposal is active.
        #[arg(long)]
        proposal: Option<u32>,
    },
    /// Show the ranked tally.
    Results {
        /// Keep refreshing until interrupted.
        #[arg(long)]
        watch: bool,
        /// Seconds between refreshes in watch mode.
        #[arg(long, default_value_t = 30)]
        every: u64,
    },
}

/// Exit codes: 0 success, 1 the action failed, 2 bad local input.
async fn run(args: Args) -> u8 {
    let config = Config::new(args.voter_url, args.ballot_url, args.results_url);
    let services = Services::new(&config);

    match args.command {
        CliCommand::Register {
            cin,
            first_name,
            last_name,
            email,
            date_of_birth,
            address,
        } => {
            let mut flow = RegistrationFlow::new(services.voters);
            *flow.form_mut() = RegistrationForm {
                cin,
                first_name,
                last_name,
                email,
                date_of_birth,
                address,
            };
            let notice = flow.submit().await;
            println!("{notice}");
            u8::from(!notice.is_success())
        }

        CliCommand::Vote {
            voter,
            candidate,
            proposal,
        } => {
            let mut flow = VotingFlow::new(services.voters, services.ballots);
            if let Err(notice) = flow.load().await {
                println!("{notice}");
                return 1;
            }

            let cin: Cin = match voter.parse() {
                Ok(cin) => cin,
                Err(err) => {
                    println!("error: {err}");
                    return 2;
                }
            };
            if let Err(err) = flow.select_voter(&cin) {
                println!("error: {err}");
                return 2;
            }
            if let Err(err) = flow.select_candidate(candidate) {
                println!("error: {err}");
                return 2;
            }
            match proposal {
                Some(id) => {
                    if let Err(err) = flow.select_proposal(id) {
                        println!("error: {err}");
                        return 2;
                    }
                }
                None => {
                    if flow.selected_proposal().is_none() {
                        let active: Vec<String> = flow
                            .active_proposals()
                            .map(|p| format!("{} ({})", p.id, p.title))
                            .collect();
                        println!(
                            "error: no single active proposal; pass --proposal. Active: [{}]",
                            active.join(", ")
                        );
                        return 2;
                    }
                }
            }

            let notice = flow.submit().await;
            println!("{notice}");
            u8::from(!notice.is_success())
        }

        CliCommand::Results { watch, every } => {
            let mut flow = ResultsFlow::new(services.results);
            if watch {
                // The watch future never completes; ctrl-c tears it down,
                // which cancels the timer and nothing else.
                tokio::select! {
                    () = flow.watch(Duration::from_secs(every), print_outcome) => {}
                    _ = tokio::signal::ctrl_c() => {
                        info!("Results watch stopped");
                    }
                }
                0
            } else {
                match flow.refresh().await {
                    Ok(board) => {
                        print_scoreboard(board);
                        0
                    }
                    Err(notice) => {
                        println!("{notice}");
                        1
                    }
                }
            }
        }
    }
}

fn print_outcome(outcome: Result<&Scoreboard, &Notice>) {
    match outcome {
        Ok(board) => print_scoreboard(board),
        Err(notice) => println!("{notice}"),
    }
}

fn print_scoreboard(board: &Scoreboard) {
    if board.is_empty() {
        println!("No results yet.");
        return;
    }
    println!("Total votes: {}", board.total_votes());
    if let Some(leader) = board.leader() {
        println!("Leading: {}", describe(leader));
    }
    for ranked in board.entries() {
        println!(
            "{:>3}. {} [{}]: {} votes ({:.1}%)",
            ranked.rank,
            ranked.entry.candidate_name,
            if ranked.entry.party.is_empty() {
                "Independent"
            } else {
                ranked.entry.party.as_str()
            },
            ranked.entry.total_votes,
            ranked.percentage
        );
    }
    println!();
}

fn describe(ranked: &RankedEntry) -> String {
    if ranked.entry.party.is_empty() {
        ranked.to_string()
    } else {
        format!("{} [{}]", ranked, ranked.entry.party)
    }
}

#[tokio::main]
async fn main() {
    // Logging first, so every later failure is visible somewhere.
    if let Err(err) = log4rs::init_file("log4rs.yaml", Default::default()) {
        eprintln!("Failed to initialise logging: {err}");
    }

    let args = Args::parse();
    let exit_code = run(args).await;
    if exit_code != 0 {
        error!("Command finished with exit code {exit_code}");
        std::process::exit(exit_code.into());
    }
}
