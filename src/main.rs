use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use domain_appraiser::{
    AppraisalResult, AppraiseDomainUseCase, ExtractDomainsUseCase, ExtractedDomains, GeminiClient,
    GenerateNamesUseCase, GeneratedDomain, GenerationRequest, GenerativeClient, LengthPreference,
    MockGenerativeClient,
};

#[derive(Parser)]
#[command(name = "domain-appraiser")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run against the offline mock client instead of the Gemini API
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Appraise a domain name
    Appraise {
        domain: String,
    },

    /// Generate brandable domain name ideas for a keyword
    Generate {
        keyword: String,

        /// TLDs to draw suggestions from (repeatable)
        #[arg(short, long = "tld", default_values_t = vec![String::from(".com")])]
        tlds: Vec<String>,

        #[arg(short, long, default_value = "any")]
        length: LengthPreference,
    },

    /// List plausible existing domains containing a keyword, grouped by TLD
    Extract {
        keyword: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client: Arc<dyn GenerativeClient> = if cli.mock {
        info!("Using offline mock client");
        Arc::new(MockGenerativeClient::new())
    } else {
        Arc::new(GeminiClient::from_env()?)
    };

    match cli.command {
        Commands::Appraise { domain } => {
            let domain = domain.trim().to_lowercase();
            if domain.is_empty() {
                eprintln!("Please provide a domain name to appraise.");
                std::process::exit(2);
            }

            let use_case = AppraiseDomainUseCase::new(client);
            match use_case.execute(&domain).await {
                Ok(result) => print_appraisal(&result),
                Err(e) => {
                    error!("appraisal failed: {e}");
                    fail("Failed to get an appraisal from the AI model. Please try again.");
                }
            }
        }

        Commands::Generate {
            keyword,
            tlds,
            length,
        } => {
            let keyword = keyword.trim().to_lowercase();
            if keyword.is_empty() {
                eprintln!("Please provide a keyword to generate names from.");
                std::process::exit(2);
            }

            let request = GenerationRequest::new(keyword, tlds).with_length(length);
            let use_case = GenerateNamesUseCase::new(client);
            match use_case.execute(&request).await {
                Ok(suggestions) => print_suggestions(&suggestions),
                Err(e) => {
                    error!("name generation failed: {e}");
                    fail("Failed to generate domain names from the AI model. Please try again.");
                }
            }
        }

        Commands::Extract { keyword } => {
            let keyword = keyword.trim().to_lowercase();
            if keyword.is_empty() {
                eprintln!("Please provide a keyword to extract domains for.");
                std::process::exit(2);
            }

            let use_case = ExtractDomainsUseCase::new(client);
            match use_case.execute(&keyword).await {
                Ok(extracted) => print_extraction(&extracted),
                Err(e) => {
                    error!("extraction failed: {e}");
                    fail("Failed to extract domains from the AI model. Please try again.");
                }
            }
        }
    }

    Ok(())
}

/// Per-request failures are recoverable by retrying, so the user sees one
/// generic message while the detailed cause goes to the log.
fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn print_appraisal(result: &AppraisalResult) {
    println!("Appraisal for {}", result.domain_name());
    println!("  Estimated value: ${:.0}", result.estimated_value());
    println!("  Value range:     {}", result.value_range());
    println!();
    println!("{}", result.explanation());

    if !result.key_factors().is_empty() {
        println!("\nKey factors:");
        for factor in result.key_factors() {
            println!(
                "  {:<20} {:>4.1}/10  {}",
                factor.factor(),
                factor.score(),
                factor.analysis()
            );
        }
    }

    if !result.comparable_sales().is_empty() {
        println!("\nComparable sales:");
        for sale in result.comparable_sales() {
            println!("  {:<30} ${:.0}", sale.domain(), sale.price());
        }
    }

    if !result.similar_available_domains().is_empty() {
        println!("\nSimilar available domains:");
        for name in result.similar_available_domains() {
            println!("  {name}");
        }
    }
}

fn print_suggestions(suggestions: &[GeneratedDomain]) {
    if suggestions.is_empty() {
        println!("No suggestions returned.");
        return;
    }

    println!("Generated {} suggestions:\n", suggestions.len());
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!(
            "{:>2}. {:<30} [{}]",
            i + 1,
            suggestion.name(),
            suggestion.status()
        );
    }
}

fn print_extraction(extracted: &ExtractedDomains) {
    if extracted.is_empty() {
        println!("No domains found.");
        return;
    }

    for group in extracted.groups() {
        println!("{} ({} domains)", group.tld(), group.domains().len());
        for domain in group.domains() {
            println!("  {domain}");
        }
        println!();
    }
}
