use std::path::PathBuf;

use clap::{Parser, Subcommand};
use crop_preview::library::LocalLibrary;
use crop_preview::registry::resolve_size_registry;
use crop_preview::{
    config,
    host::{ContentRegistry, SizeRegistry},
    output, preview, render, settings,
};

#[derive(Parser)]
#[command(name = "crop-preview")]
#[command(version)]
#[command(about = "Preview the generated crop sizes of a library's featured images")]
#[command(long_about = "\
Preview the generated crop sizes of a library's featured images

A library is a directory of content items plus a config.toml describing
the host environment (content types, named sizes, display clamp):

  library/
  ├── config.toml              # Types, built-in size options, extra sizes
  ├── settings.json            # Saved preview selections (managed by select)
  ├── post/
  │   ├── launch.jpg           # Content item; its own featured image
  │   └── notes.txt            # Item without a featured image
  └── page/
      └── hero.png

Pick what to preview with 'select', then render a panel per item with
'preview'. Unknown types and sizes are dropped on save, never errors.

Run 'crop-preview gen-config' to generate a documented config.toml.")]
struct Cli {
    /// Library root directory
    #[arg(long, default_value = "library", global = true)]
    library: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List content items by type
    Items,
    /// List content types and the resolved size registry with selections
    Sizes,
    /// Sanitize and persist preview selections
    Select(SelectArgs),
    /// Render the crop preview page for a content item
    Preview(PreviewArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct SelectArgs {
    /// Content types to preview (replaces the stored set; unknown names are dropped)
    #[arg(long = "types", value_delimiter = ',', num_args = 0..)]
    types: Option<Vec<String>>,

    /// Size names to preview; "full" selects the original image
    #[arg(long = "sizes", value_delimiter = ',', num_args = 0..)]
    sizes: Option<Vec<String>>,
}

#[derive(clap::Args)]
struct PreviewArgs {
    /// Content item identifier, as <type>/<file>
    item: String,

    /// Output HTML file
    #[arg(short, long, default_value = "preview.html")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Items => {
            let library = LocalLibrary::open(&cli.library)?;
            output::print_items(&library.items());
        }
        Command::Sizes => {
            let library = LocalLibrary::open(&cli.library)?;
            let selections = settings::load_selections(&library);
            output::print_content_types(&library.content_types(), &selections);
            output::print_sizes(&resolve_size_registry(&library), &selections);
        }
        Command::Select(args) => {
            let library = LocalLibrary::open(&cli.library)?;
            let mut selections = settings::load_selections(&library);

            // An omitted flag keeps the stored set; a provided one replaces
            // it, routed through the same sanitize path a form submission
            // would take.
            if let Some(types) = args.types {
                let candidate = serde_json::json!(types);
                selections.content_types =
                    settings::sanitize_content_types(&candidate, &library.content_types());
            }
            if let Some(sizes) = args.sizes {
                let candidate = serde_json::json!(sizes);
                selections.sizes =
                    settings::sanitize_size_selections(&candidate, &library.size_names());
            }

            settings::persist(&library, &selections)?;
            output::print_selection_summary(&selections);
        }
        Command::Preview(args) => {
            let library = LocalLibrary::open(&cli.library)?;
            let selections = settings::load_selections(&library);

            let Some(content_type) = library.item_content_type(&args.item) else {
                return Err(format!("'{}' is not a library item (expected <type>/<file>)", args.item).into());
            };
            if !selections.content_types.contains(content_type) {
                println!(
                    "Previews are not enabled for content type '{content_type}'. \
                     Enable it with: crop-preview select --types {content_type}"
                );
                return Ok(());
            }

            let registry = resolve_size_registry(&library);
            let built = preview::build_preview(&library, &registry, &args.item, &selections);
            let page = render::render_preview_page(&args.item, &built);
            std::fs::write(&args.output, page.into_string())?;
            println!("Generated {}", args.output.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
