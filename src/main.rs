use ao_gym::adapters::console::{ConsoleRenderer, TracingNotifier};
use ao_gym::adapters::mock_backend::MockSubmitter;
use ao_gym::core::OfferingId;
use ao_gym::utils::error::GymError;
use ao_gym::utils::{logger, validation::Validate};
use ao_gym::{
    CheckoutFlow, CliConfig, FileStorage, PlanQueue, QueueAction, SessionStore, SiteConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let site = match &config.config {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::builtin()?,
    };

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(site.log_level());
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting ao-gym CLI for {}", site.site.name);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate().and_then(|_| site.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let catalog = site.catalog();
    tracing::debug!("Loaded {} program(s)", catalog.len());

    if let Some(category) = &config.category {
        println!("Programs ({}):", category);
        for program in catalog.by_category(category) {
            println!(
                "  [{}] {} - {}/month ({})",
                program.id,
                program.title,
                program.unit_price,
                program.level.as_deref().unwrap_or("All Levels")
            );
        }
    }

    let storage_dir = config
        .storage_dir
        .clone()
        .or_else(|| site.storage_dir().map(str::to_string))
        .unwrap_or_else(|| "./.ao-gym".to_string());
    let session = SessionStore::with_key(FileStorage::new(storage_dir), site.storage_key());
    if let Some(user) = session.current_user() {
        tracing::info!("{}", user.welcome_message());
    }

    let mut queue = PlanQueue::new(&catalog, ConsoleRenderer::new(), TracingNotifier);

    for action in &config.actions {
        let outcome = match *action {
            QueueAction::Add(id) => queue.add(id).map(|_| ()),
            QueueAction::Adjust(id, delta) => queue.adjust_quantity(id, delta).map(|_| ()),
            QueueAction::Remove(id) => {
                queue.remove(id);
                Ok(())
            }
            QueueAction::Clear => {
                queue.clear();
                Ok(())
            }
        };

        if let Err(e) = outcome {
            tracing::warn!("Action {:?} failed: {}", action, e);
            eprintln!("❌ {}", e.user_friendly_message());
        }
    }

    let selected: Vec<OfferingId> = queue.lines().iter().map(|l| l.offering_id).collect();
    println!(
        "📋 {} program(s) in plan, total {}/month",
        queue.line_count(),
        queue.total()
    );
    tracing::debug!("Plan order: {:?}", selected);

    if !config.submit {
        return Ok(());
    }

    let mut form = config.membership_form();
    if let Some(user) = session.current_user() {
        if form.full_name.is_empty() {
            form.full_name = user.full_name();
        }
        if form.email.is_empty() {
            form.email = user.email.clone();
        }
        if form.phone.is_empty() {
            form.phone = user.phone.clone();
        }
    }

    let submitter = MockSubmitter::new(site.checkout_latency(), site.contact_latency());
    let mut checkout = CheckoutFlow::new(submitter, TracingNotifier);
    match checkout.submit(&form, &mut queue).await {
        Ok(receipt) => {
            println!("✅ Application submitted! Reference: {}", receipt.reference);
            println!("📁 {} program(s), {}/month", receipt.line_count, receipt.total);
        }
        Err(e) => {
            tracing::error!("❌ Checkout failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e {
                GymError::ValidationError { .. } => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
