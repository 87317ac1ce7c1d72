use clap::Parser;
use color_eyre::Result;

use autoprompt::RawChoice;
use autoprompt::app::{self, SessionLifecycle};
use autoprompt::cli::{self, Args};
use autoprompt::config;
use autoprompt::logging;
use autoprompt::prompt::AutocompletePrompt;
use autoprompt::suggest;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init();

    let args = Args::parse();

    let mut config = config::load_config(args.config.as_deref())?;
    args.apply_to(&mut config);

    let choices = cli::load_choices(args.choices_path())?;
    let options = args.prompt_options(&config, choices);

    let (_, terminal_rows) = crossterm::terminal::size()?;
    let has_descriptions = options
        .choices
        .iter()
        .any(|raw| matches!(raw, RawChoice::Record(record) if record.description.is_some()));
    let height = app::viewport_height(
        options.limit,
        options.choices.len(),
        has_descriptions,
        terminal_rows,
    );

    let matcher = suggest::matcher_from_config(&config.matcher);
    let mut prompt = AutocompletePrompt::new(options, matcher, SessionLifecycle::new());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut terminal = app::init_terminal(height)?;
    let result = runtime.block_on(app::run(&mut prompt, &mut terminal));
    let used_rows = app::used_rows(&prompt, &mut terminal);
    app::restore_terminal(&mut terminal, used_rows)?;
    result?;

    let code = match prompt.lifecycle().outcome() {
        Some(outcome) => {
            if let Some(output) = outcome.output() {
                println!("{output}");
            }
            outcome.exit_code()
        }
        None => 1,
    };

    std::process::exit(code)
}
