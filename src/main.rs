use clap::Parser;
use portfolio_contact::config::{CatalogSection, Command};
use portfolio_contact::utils::error::{ContactError, ErrorSeverity};
use portfolio_contact::utils::logger;
use portfolio_contact::{
    CliConfig, ConnectionStatus, ConsoleNotifier, ContactForm, Field, HttpContactEndpoint,
    Portfolio,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting portfolio-contact CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(config: &CliConfig) -> Result<(), ContactError> {
    match &config.command {
        Command::Catalog { section } => print_catalog(*section),
        Command::Probe => {
            let endpoint = HttpContactEndpoint::from_config(&config.settings()?)?;
            let form = ContactForm::new(endpoint, ConsoleNotifier);
            match form.mount().await {
                ConnectionStatus::Connected => {
                    println!("🟢 Contact endpoint is connected");
                    Ok(())
                }
                _ => Err(ContactError::NotConnected),
            }
        }
        Command::Send {
            name,
            email,
            message,
        } => {
            let endpoint = HttpContactEndpoint::from_config(&config.settings()?)?;
            let form = ContactForm::new(endpoint, ConsoleNotifier);
            form.mount().await;

            form.update_field(Field::Name, name.as_str());
            form.update_field(Field::Email, email.as_str());
            form.update_field(Field::Message, message.as_str());

            form.send().await
        }
    }
}

fn print_catalog(section: CatalogSection) -> Result<(), ContactError> {
    let portfolio = Portfolio::builtin()?;

    match section {
        CatalogSection::About => {
            println!("{}", portfolio.about.name);
            println!("{}", portfolio.about.headline);
            println!();
            println!("{}", portfolio.about.bio);
        }
        CatalogSection::Projects => {
            for project in &portfolio.projects {
                println!("📦 {} [{}]", project.title, project.tech.join(", "));
                if let Some(demo) = &project.demo {
                    println!("   demo: {}", demo);
                }
                if let Some(repo) = &project.repository {
                    println!("   repo: {}", repo);
                }
            }
        }
        CatalogSection::Certifications => {
            for cert in &portfolio.certifications {
                println!("🏅 {} ({}, {})", cert.name, cert.issuer, cert.year);
            }
        }
        CatalogSection::Experience => {
            for item in &portfolio.experience {
                println!("• {} @ {} ({})", item.title, item.organization, item.period);
                println!("  {}", item.description);
            }
        }
        CatalogSection::TechStack => {
            for item in &portfolio.tech_stack {
                println!("🛠  {} ({})", item.name, item.logo);
            }
        }
        CatalogSection::Links => {
            for link in &portfolio.social_links {
                println!("{}: {}", link.label, link.href);
            }
        }
        CatalogSection::Sections => {
            for section in &portfolio.sections {
                println!("{} {}", section.anchor, section.name);
            }
        }
    }

    Ok(())
}
