use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use olympic_stats::viz::util::format_count;
use olympic_stats::viz::{self, ChartConfig, LegendMode};
use olympic_stats::{
    App, Config, CountryDetail, DataSource, DetailState, Overview, selection, storage,
};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "olympics",
    version,
    about = "Summarize & chart Olympic Games participation per country"
)]
struct Cli {
    /// Dataset location: JSON file path or http(s) URL [default: assets/mock/olympic.json]
    #[arg(long, global = true, env = "OLYMPICS_DATA_SOURCE")]
    source: Option<String>,
    /// Locale for number formatting (e.g., en, de, fr).
    #[arg(long, global = true, default_value = "en")]
    locale: String,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Number of Games, number of countries, and medals per country.
    Overview(OutputArgs),
    /// Participations, medals, and athletes of one country.
    Detail {
        /// Country name, matched exactly (e.g., "France").
        country: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the country names available for `detail`.
    Countries,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LegendArg {
    Right,
    Bottom,
    Hidden,
}

impl From<LegendArg> for LegendMode {
    fn from(l: LegendArg) -> Self {
        match l {
            LegendArg::Right => LegendMode::Right,
            LegendArg::Bottom => LegendMode::Bottom,
            LegendArg::Hidden => LegendMode::Hidden,
        }
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Save results to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Create a chart at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Legend placement.
    #[arg(long, value_enum, default_value = "bottom")]
    legend: LegendArg,
}

impl OutputArgs {
    fn chart(&self) -> ChartConfig {
        ChartConfig::default()
            .with_size(self.width, self.height)
            .with_legend(self.legend.into())
    }

    fn out_format(&self, path: &Path) -> Result<OutFormat> {
        let fmt = match self.format {
            Some(OutFormat::Csv) => "csv".to_string(),
            Some(OutFormat::Json) => "json".to_string(),
            None => path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("csv")
                .to_ascii_lowercase(),
        };
        match fmt.as_str() {
            "csv" => Ok(OutFormat::Csv),
            "json" => Ok(OutFormat::Json),
            other => Err(anyhow!("unsupported format: {}", other)),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::default().with_locale(cli.locale.clone());
    if let Some(src) = cli.source.as_deref() {
        config = config.with_source(DataSource::parse(src));
    }

    match cli.cmd {
        Command::Overview(output) => {
            let config = config.with_chart(output.chart());
            let app = App::start(config);
            cmd_overview(&app, &output)
        }
        Command::Detail { country, output } => {
            let config = config.with_chart(output.chart());
            let app = App::start(config);
            cmd_detail(&app, &country, &output)
        }
        Command::Countries => cmd_countries(&App::start(config)),
    }
}

fn no_data(app: &App) -> anyhow::Error {
    anyhow!(
        "dataset could not be loaded from {}",
        app.config().source
    )
}

fn cmd_overview(app: &App, output: &OutputArgs) -> Result<()> {
    let view = app.overview_view();
    let overview = view.current().ok_or_else(|| no_data(app))?;
    let locale = app.config().locale.as_str();

    println!("Number of JOs: {}", overview.number_of_games);
    println!("Number of countries: {}", overview.number_of_countries);
    println!("Medals per country:");
    for s in &overview.pie_slices {
        println!("  {:<20} {:>8}", s.name, format_count(s.value, locale));
    }

    if let Some(path) = output.out.as_ref() {
        match output.out_format(path)? {
            OutFormat::Csv => storage::save_overview_csv(&overview, path)?,
            OutFormat::Json => storage::save_overview_json(&overview, path)?,
        }
        eprintln!("Saved {} rows to {}", overview.pie_slices.len(), path.display());
    }
    if let Some(plot_path) = output.plot.as_ref() {
        plot_overview(app, &overview, plot_path)?;
    }
    Ok(())
}

fn plot_overview(app: &App, overview: &Overview, path: &Path) -> Result<()> {
    viz::plot_pie(
        &overview.pie_slices,
        path,
        &app.config().chart,
        &app.config().locale,
    )?;
    eprintln!("Wrote plot to {}", path.display());
    Ok(())
}

fn cmd_detail(app: &App, country: &str, output: &OutputArgs) -> Result<()> {
    let view = app.detail_view(country);
    let detail: CountryDetail = match view.state() {
        DetailState::Ready(d) => d,
        DetailState::Pending => return Err(no_data(app)),
        DetailState::NotFound(name) => {
            eprintln!("Unknown country \"{}\", showing the overview instead.", name);
            drop(view);
            return cmd_overview(app, output);
        }
    };
    let locale = app.config().locale.as_str();

    println!("{}", detail.country);
    println!("Number of entries: {}", detail.entries_count);
    println!("Total number medals: {}", format_count(detail.total_medals, locale));
    println!(
        "Total number of athletes: {}",
        format_count(detail.total_athletes, locale)
    );
    println!("Medals per edition:");
    for p in &detail.line_series.series {
        println!("  {}  {:>6}", p.name, format_count(u64::from(p.value), locale));
    }

    if let Some(path) = output.out.as_ref() {
        match output.out_format(path)? {
            OutFormat::Csv => storage::save_detail_csv(&detail, path)?,
            OutFormat::Json => storage::save_detail_json(&detail, path)?,
        }
        eprintln!(
            "Saved {} rows to {}",
            detail.line_series.series.len(),
            path.display()
        );
    }
    if let Some(plot_path) = output.plot.as_ref() {
        viz::plot_line(
            &detail.line_series,
            plot_path,
            &app.config().chart,
            locale,
        )?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }
    Ok(())
}

fn cmd_countries(app: &App) -> Result<()> {
    let dataset = app.store().dataset().ok_or_else(|| no_data(app))?;
    for name in selection::country_names(&dataset) {
        println!("{}", name);
    }
    Ok(())
}
