/// swatchgen command line entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::{Parser, Subcommand};
    use swatchgen::color::{Color, GradientAxis, TextColor};
    use swatchgen::{
        AppConfig, FileStorage, Message, Palette, PaletteApp, PaletteError, PaletteId,
        PaletteLibrary, PaletteState, RenderSurface, SystemClipboard,
    };

    #[derive(Parser)]
    #[command(name = "swatchgen")]
    #[command(version, about = "Color palette generator", long_about = None)]
    struct Cli {
        /// Palette library file (defaults to the user data directory)
        #[arg(long, value_name = "FILE", global = true)]
        library: Option<PathBuf>,

        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Generate a random palette
        Generate {
            /// Number of swatches
            #[arg(short = 'n', long, value_name = "N")]
            count: Option<usize>,

            /// Seed for a reproducible palette
            #[arg(short, long, value_name = "SEED")]
            seed: Option<u64>,

            /// Save the generated palette under NAME
            #[arg(long, value_name = "NAME")]
            save: Option<String>,

            /// Copy the hex code of swatch INDEX (1-based) to the clipboard
            #[arg(long, value_name = "INDEX")]
            copy: Option<usize>,
        },

        /// Save a palette from hex codes
        Save {
            /// Palette name
            name: String,

            /// Colors as #rrggbb or #rgb
            #[arg(value_name = "COLOR", required = true)]
            colors: Vec<String>,
        },

        /// List saved palettes
        List,

        /// Show a saved palette
        Show {
            /// Palette id as printed by `list`
            id: PaletteId,

            /// Copy the hex code of swatch INDEX (1-based) to the clipboard
            #[arg(long, value_name = "INDEX")]
            copy: Option<usize>,
        },
    }

    #[derive(Debug, Clone, Default)]
    struct Row {
        color: Color,
        label: String,
        text: Option<TextColor>,
        locked: bool,
        positions: [f64; 3],
    }

    fn axis_slot(axis: GradientAxis) -> usize {
        match axis {
            GradientAxis::Hue => 0,
            GradientAxis::Saturation => 1,
            GradientAxis::Brightness => 2,
        }
    }

    /// Prints the swatch row as a table once the app is done with it.
    #[derive(Debug, Default)]
    struct TerminalSurface {
        rows: Vec<Row>,
    }

    impl TerminalSurface {
        fn new(count: usize) -> Self {
            Self {
                rows: vec![Row::default(); count],
            }
        }

        fn row(&mut self, index: usize) -> Option<&mut Row> {
            self.rows.get_mut(index)
        }

        fn print(&self) {
            for (i, row) in self.rows.iter().enumerate() {
                let [h, s, l] = row.positions;
                println!(
                    "{:>2}  {}  {:<5}  {}  h {:>3.0}  s {:.2}  l {:.2}",
                    i + 1,
                    row.label,
                    row.text.map(|t| t.to_string()).unwrap_or_default(),
                    if row.locked { "🔒" } else { "  " },
                    h,
                    s,
                    l
                );
            }
        }
    }

    impl RenderSurface for TerminalSurface {
        fn set_background(&mut self, index: usize, color: Color) {
            if let Some(row) = self.row(index) {
                row.color = color;
            }
        }

        fn set_label(&mut self, index: usize, text: &str) {
            if let Some(row) = self.row(index) {
                row.label = text.to_string();
            }
        }

        fn set_text_color(&mut self, index: usize, color: TextColor) {
            if let Some(row) = self.row(index) {
                row.text = Some(color);
            }
        }

        fn set_locked(&mut self, index: usize, locked: bool) {
            if let Some(row) = self.row(index) {
                row.locked = locked;
            }
        }

        fn set_adjust_open(&mut self, _index: usize, _open: bool) {}

        fn set_slider_position(&mut self, index: usize, axis: GradientAxis, value: f64) {
            if let Some(row) = self.row(index) {
                row.positions[axis_slot(axis)] = value;
            }
        }

        fn set_slider_gradient(&mut self, _index: usize, _axis: GradientAxis, _css: &str) {}

        fn slider_position(&self, index: usize, axis: GradientAxis) -> Option<f64> {
            self.rows.get(index).map(|row| row.positions[axis_slot(axis)])
        }

        fn show_notice(&mut self, text: &str) {
            println!("{}", text);
        }

        fn set_library(&mut self, palettes: &[Palette]) {
            log::debug!("📂 {} saved palettes", palettes.len());
        }
    }

    type CliApp = PaletteApp<FileStorage, TerminalSurface, SystemClipboard>;

    /// Convert a 1-based swatch number from the command line.
    fn swatch_index(number: usize, len: usize) -> Result<usize, PaletteError> {
        number
            .checked_sub(1)
            .filter(|&index| index < len)
            .ok_or(PaletteError::IndexOutOfRange { index: number, len })
    }

    fn copy_swatch(app: &mut CliApp, number: Option<usize>) -> Result<(), PaletteError> {
        if let Some(number) = number {
            let index = swatch_index(number, app.state().len())?;
            app.update(Message::CopyHex(index));
        }
        Ok(())
    }

    pub fn run() -> Result<(), PaletteError> {
        let cli = Cli::parse();

        let config = AppConfig::load_from_default_path().unwrap_or_default();
        env_logger::Builder::new()
            .filter_level(config.preferences.log_level.to_level_filter())
            .parse_default_env()
            .init();

        let path = match cli.library {
            Some(path) => path,
            None => FileStorage::default_path(&config.preferences.storage_key)
                .ok_or_else(|| PaletteError::storage("No data directory available"))?,
        };
        let mut library = PaletteLibrary::open(FileStorage::new(path));

        match cli.command {
            Commands::Generate {
                count,
                seed,
                save,
                copy,
            } => {
                let count = count.unwrap_or(config.preferences.swatch_count);
                let state = match seed {
                    Some(seed) => PaletteState::from_seed(count, seed),
                    None => PaletteState::initialize(count),
                };
                let mut app = PaletteApp::new(
                    state,
                    library,
                    TerminalSurface::new(count),
                    SystemClipboard,
                );
                if let Some(name) = save {
                    app.update(Message::SavePalette(name));
                }
                copy_swatch(&mut app, copy)?;
                app.surface().print();
            }
            Commands::Save { name, colors } => {
                let colors = colors
                    .iter()
                    .map(|hex| hex.parse::<Color>())
                    .collect::<Result<Vec<_>, _>>()?;
                let palette = library.save(&name, &colors)?;
                println!("Saved '{}' as {}", palette.name, palette.id);
            }
            Commands::List => {
                if library.is_empty() {
                    println!("No saved palettes");
                }
                for palette in library.palettes() {
                    let hexes: Vec<String> = palette.colors.iter().map(|c| c.to_hex()).collect();
                    println!("{:>14}  {:<20}  {}", palette.id, palette.name, hexes.join(" "));
                }
            }
            Commands::Show { id, copy } => {
                let palette = library
                    .find_by_id(id)
                    .cloned()
                    .ok_or(PaletteError::NotFound(id))?;
                let count = palette.colors.len();
                let mut app = PaletteApp::new(
                    PaletteState::initialize(count),
                    library,
                    TerminalSurface::new(count),
                    SystemClipboard,
                );
                app.update(Message::SelectPalette(id));
                println!("{}", palette.name);
                copy_swatch(&mut app, copy)?;
                app.surface().print();
            }
        }

        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    match native::run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
