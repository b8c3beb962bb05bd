//! `subsync` command-line front end
//!
//! Parses, aligns and replays SRT tracks without a media player, using the
//! simulated player from `subsync-player` as the time source.

use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::{
    fs,
    path::{Path, PathBuf},
};
use subsync_core::{
    align,
    annotate::{annotate, plain_text},
    decode_text,
    parser::{format_timestamp, parse_srt_report, write_srt},
    BlockId, NoLayout, SyncView,
};
use subsync_player::{
    discover_tracks, preselect, tracks::lang_code_from_file_name, FsFetcher, HttpTranslator,
    HttpVocabulary, LookupPopup, PlaybackSession, PlayerConfig, PlayerControl, SharedSession,
    SimulatedPlayer, SubtitleTrack, TrackSelection, WordSelection,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "subsync", author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse an SRT file and print its cues as JSON
    Parse {
        file: PathBuf,
        /// Print normalized SRT instead of JSON
        #[arg(long)]
        srt: bool,
    },

    /// Align two tracks into display blocks and print them as JSON
    Align {
        primary: PathBuf,
        secondary: Option<PathBuf>,
    },

    /// List the subtitle tracks of a video and the initial selection
    Tracks {
        /// Directory holding `<video_id>.<lang>.srt` files
        dir: PathBuf,
        video_id: String,
    },

    /// Replay tracks against a simulated clock, printing each line change
    Play {
        primary: PathBuf,
        secondary: Option<PathBuf>,
        /// Start time in seconds
        #[arg(long, default_value_t = 0.0)]
        from: f64,
        /// Stop time in seconds; defaults to the end of the last block
        #[arg(long)]
        to: Option<f64>,
        /// Clock tick in seconds
        #[arg(long, default_value_t = 0.25)]
        step: f64,
        /// Loop whichever line is active
        #[arg(long = "loop-line")]
        loop_line: bool,
    },

    /// Print the clickable-word markup of a line
    Annotate { text: String },

    /// Translate a word of a line through the lookup backend
    Lookup {
        text: String,
        /// Index of the clicked word
        #[arg(short, long, default_value_t = 0)]
        word: usize,
        /// Language of the line
        #[arg(short, long)]
        lang: String,
        /// Save the word after translating it
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Parse { file, srt } => parse(&file, srt),
        Commands::Align { primary, secondary } => align_tracks(&primary, secondary.as_deref()),
        Commands::Tracks { dir, video_id } => list_tracks(&dir, &video_id),
        Commands::Play {
            primary,
            secondary,
            from,
            to,
            step,
            loop_line,
        } => play(&primary, secondary.as_deref(), from, to, step, loop_line).await,
        Commands::Annotate { text } => {
            println!("{}", annotate(&text));
            Ok(())
        }
        Commands::Lookup {
            text,
            word,
            lang,
            save,
        } => lookup(&text, word, &lang, save).await,
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_track(path: &Path) -> Result<subsync_core::CueSequence> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let text = decode_text(&bytes).with_context(|| format!("decoding {}", path.display()))?;
    let report = parse_srt_report(&text);
    for issue in &report.issues {
        warn!(file = %path.display(), "{issue}");
    }
    Ok(report.cues)
}

fn parse(file: &Path, srt: bool) -> Result<()> {
    let cues = read_track(file)?;
    if srt {
        print!("{}", write_srt(cues.as_slice()));
    } else {
        println!("{}", serde_json::to_string_pretty(&cues)?);
    }
    Ok(())
}

fn align_tracks(primary: &Path, secondary: Option<&Path>) -> Result<()> {
    let primary = read_track(primary)?;
    let secondary = secondary.map(read_track).transpose()?.unwrap_or_default();
    let blocks = align(primary.as_slice(), secondary.as_slice());
    println!("{}", serde_json::to_string_pretty(&blocks)?);
    Ok(())
}

fn list_tracks(dir: &Path, video_id: &str) -> Result<()> {
    let names = fs::read_dir(dir)
        .with_context(|| format!("listing {}", dir.display()))?
        .filter_map(|entry| entry.ok()?.file_name().into_string().ok())
        .collect::<Vec<_>>();
    let tracks = discover_tracks(video_id, &names, &dir.to_string_lossy());
    let selection = preselect(&tracks);
    let out = json!({ "tracks": tracks, "selection": selection });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// Track for a file named `<video_id>.<lang>.srt`; other names get no tag
fn track_for(path: &Path) -> SubtitleTrack {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let video_id = name.split('.').next().unwrap_or_default();
    let lang = lang_code_from_file_name(video_id, &name).unwrap_or_default();
    SubtitleTrack::new(&lang, path.to_string_lossy())
}

/// Tracks which block is highlighted
#[derive(Default)]
struct ActiveLine(Option<BlockId>);

impl SyncView for ActiveLine {
    fn clear_highlights(&mut self) {
        self.0 = None;
    }

    fn highlight(&mut self, id: BlockId) {
        self.0 = Some(id);
    }

    fn scroll_by(&mut self, _delta: f64) {}
}

async fn play(
    primary: &Path,
    secondary: Option<&Path>,
    from: f64,
    to: Option<f64>,
    step: f64,
    loop_line: bool,
) -> Result<()> {
    ensure!(step.is_finite() && step > 0.0, "--step must be positive");

    let config = PlayerConfig::from_env()?;
    let session = SharedSession::new(PlaybackSession::new(config));
    let selection = TrackSelection::new(Some(track_for(primary)), secondary.map(track_for));
    let outcome = session.change_tracks(&FsFetcher::new(), selection).await;
    if let Some(err) = outcome.errors.first() {
        bail!("{err}");
    }

    let mut session = session.lock();
    let Some(last) = session.blocks().last() else {
        bail!("{} has no cues", primary.display());
    };
    let to = to.unwrap_or(last.end);
    ensure!(to > from, "--to must be after --from");
    if loop_line {
        session.toggle_loop();
    }
    info!(blocks = session.blocks().len(), from, to, loop_line, "replaying");

    for line in replay(&mut session, from, to, step) {
        println!("{line}");
    }
    Ok(())
}

/// Run a simulated clock from `from` until it passes `to`
///
/// Returns one transcript line per active-line change or loop seek. The
/// clock runs one tick past `to` so that a line ending exactly at `to`
/// can still trigger its loop.
fn replay(session: &mut PlaybackSession, from: f64, to: f64, step: f64) -> Vec<String> {
    let blocks = session.blocks().to_vec();
    let mut player = SimulatedPlayer::new(to + step);
    player.seek(from);
    player.play();

    let mut transcript = Vec::new();
    let mut line = ActiveLine::default();
    let mut shown = None;
    let ticks = ((to - from) / step).ceil() as usize + 1;
    for _ in 0..ticks {
        player.advance(step);
        let time = player.current_time();
        let outcome = session.on_time_update(&mut player, &NoLayout, &mut line);

        if let Some(target) = outcome.seek_to() {
            transcript.push(format!(
                "{}  loop -> {}",
                format_timestamp(time),
                format_timestamp(target)
            ));
            continue;
        }
        if line.0 != shown {
            shown = line.0;
            transcript.push(match shown.and_then(|id| blocks.get(id.index())) {
                Some(block) => format!(
                    "{}  {} | {}",
                    format_timestamp(time),
                    plain_text(&block.primary_text),
                    plain_text(&block.secondary_text)
                ),
                None => format!("{}  -", format_timestamp(time)),
            });
        }
        if player.is_paused() {
            break;
        }
    }
    transcript
}

async fn lookup(text: &str, word: usize, lang: &str, save: bool) -> Result<()> {
    let config = PlayerConfig::from_env()?;
    let lookup = subsync_core::resolve_click(text, word, lang)
        .with_context(|| format!("line has no word {word}"))?;
    let original_markup = subsync_core::annotate::mark_word(text, word).unwrap_or_default();

    let mut popup = LookupPopup::new(&config.native_lang_code);
    let translator = HttpTranslator::new(&config.api_base_url);
    let response = popup
        .translate(
            &translator,
            WordSelection {
                lookup,
                original_markup,
            },
        )
        .await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    if save {
        let store = HttpVocabulary::new(&config.api_base_url);
        let saved = popup.save(&store).await?;
        info!("{}", saved.message);
    }
    Ok(())
}
