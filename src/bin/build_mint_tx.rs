use clap::Parser;
use tokencard::{build_mint_transaction, EditionPricing, Result};

/// Print the wallet-ready mint transaction payload for an edition contract.
#[derive(Parser)]
#[command(name = "build_mint_tx")]
struct Args {
  /// Edition contract address (0x-prefixed).
  contract_address: String,

  /// Mint price in ether, as reported by the indexer.
  #[arg(long, default_value = "0")]
  price: String,

  /// Treat the edition as a free mint (only the launchpad fee is charged).
  #[arg(long)]
  free: bool,

  /// Number of tokens to mint.
  #[arg(long, default_value_t = 1)]
  quantity: u64,
}

fn run(args: &Args) -> Result<()> {
  let pricing = EditionPricing {
    price_eth: args.price.clone(),
    is_free_mint: args.free,
  };
  let tx = build_mint_transaction(&args.contract_address, &pricing, args.quantity)?;
  let json =
    serde_json::to_string_pretty(&tx).map_err(|e| tokencard::Error::Other(e.to_string()))?;
  println!("{json}");
  Ok(())
}

fn main() {
  let args = Args::parse();
  if let Err(err) = run(&args) {
    eprintln!("error: {err}");
    std::process::exit(1);
  }
}
