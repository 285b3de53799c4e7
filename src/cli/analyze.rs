use crate::cli::AnalyzeArgs;
use crate::config::{Config, DanglingPolicy};
use crate::location::LocationTarget;
use crate::output::{self, AnalysisReport};
use crate::prompt::build_prompt;
use crate::provider;
use crate::source::{GoogleClient, GoogleCredentials};
use chrono::{Local, Utc};
use tracing::{info, warn};

pub async fn execute(args: AnalyzeArgs) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(args.config.as_deref())?;

    // Apply CLI overrides
    if let Some(prompt_file) = args.prompt_file {
        config.prompt_file = Some(prompt_file);
    }
    if let Some(report_dir) = args.report_dir {
        config.report_dir = report_dir;
    }
    if args.keep_dangling {
        config.parser.dangling = DanglingPolicy::Keep;
    }

    config.validate()?;

    // Fail on a missing key before spending a Google API call
    let chat = provider::create_provider(&config.openai, args.openai_api_key)?;

    let target = LocationTarget::resolve(
        args.url.as_deref(),
        args.account_id.as_deref(),
        args.location_id.as_deref(),
    )?;

    let google = GoogleClient::new(
        config.google.clone(),
        GoogleCredentials {
            places_api_key: args.places_api_key,
            access_token: args.access_token,
        },
    )?;
    let place = google.fetch(&target).await?;

    if place.reviews.is_empty() {
        warn!("No reviews found for {}", target);
        println!("No reviews found for the specified location.");
        return Ok(());
    }

    let business = place.name.clone().unwrap_or_default();
    println!(
        "Retrieved {} reviews for {}.",
        place.reviews.len(),
        place.name.as_deref().unwrap_or("the location")
    );

    if args.show_reviews {
        output::print_reviews(&place.reviews);
    }

    let template = config.prompt_template()?;
    let prompt = build_prompt(&template, &place);

    let outcome = provider::analyze(
        chat.as_ref(),
        &config.openai.system_prompt,
        &prompt,
        config.parser.dangling,
    )
    .await;

    output::print_analysis(&outcome);

    if outcome.structured().is_some_and(|s| s.is_empty()) {
        warn!("Analysis reply did not follow the requested format");
    }

    if args.csv {
        if let Some(structured) = outcome.structured() {
            let path = args.csv_dir.join(output::csv_file_name(&business));
            if output::write_csv(&path, structured, &business)? {
                println!("CSV written to {}", path.display());
            } else {
                println!("No negative reviews to export.");
            }
        }
    }

    let failed = !outcome.is_success();

    if args.report {
        let date_str = Local::now().format("%Y-%m-%d").to_string();
        let report_dir = config.report_dir.join(&date_str);
        let report = AnalysisReport {
            timestamp: Utc::now().to_rfc3339(),
            target: target.to_string(),
            business: place.name,
            reviews: place.reviews,
            outcome,
        };
        let md_path = output::write_report(&report_dir, &report)?;
        info!("Report: {:?}", md_path);
    }

    if failed {
        anyhow::bail!("Sentiment analysis failed; check your OpenAI API key and try again");
    }

    Ok(())
}
