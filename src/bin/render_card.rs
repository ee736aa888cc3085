use clap::Parser;
use std::io::{Read, Write};
use std::path::PathBuf;
use tokencard::{Result, TokenImageResolver};

/// Render an edition token's on-chain artwork to a PNG social card.
#[derive(Parser)]
#[command(name = "render_card")]
struct Args {
  /// Token URI, a path to a file containing one, or "-" to read stdin.
  token_uri: String,

  /// Square output size in pixels (defaults to the resolver's configured
  /// size).
  #[arg(long)]
  size: Option<u32>,

  /// Write PNG bytes to this path instead of stdout.
  #[arg(long)]
  out: Option<PathBuf>,

  /// Print the embedded SVG data URI instead of rasterizing.
  #[arg(long)]
  svg_only: bool,
}

fn read_token_uri(arg: &str) -> std::io::Result<String> {
  if arg == "-" {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    return Ok(input.trim().to_string());
  }
  if arg.starts_with("data:") {
    return Ok(arg.to_string());
  }
  Ok(std::fs::read_to_string(arg)?.trim().to_string())
}

fn run(args: &Args) -> Result<()> {
  let token_uri = read_token_uri(&args.token_uri)?;
  let resolver = TokenImageResolver::new();

  if args.svg_only {
    let image_uri = resolver.resolve_to_data_image(&token_uri)?;
    println!("{image_uri}");
    return Ok(());
  }

  let image = match args.size {
    Some(size) => resolver.rasterize_to_png(&token_uri, size)?,
    None => resolver.rasterize_to_png_default(&token_uri)?,
  };
  match &args.out {
    Some(path) => std::fs::write(path, &image.bytes)?,
    None => std::io::stdout().write_all(&image.bytes)?,
  }

  Ok(())
}

fn main() {
  let args = Args::parse();
  if let Err(err) = run(&args) {
    eprintln!("error: {err}");
    std::process::exit(1);
  }
}
