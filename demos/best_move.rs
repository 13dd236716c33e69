use anyhow::Result;
use log::info;
use scrabble_solver::{Board, Config, Language, Rack, Solver, TileBag, Trie};
use std::time::Instant;

const WORDS: &[&str] = &[
    "aas", "abel", "al", "als", "bel", "bes", "dam", "dat", "de", "dek", "el", "en", "es", "ga",
    "gel", "hek", "ja", "je", "kaas", "la", "les", "me", "na", "om", "pas", "poel", "poelen",
    "qua", "ree", "sla", "spoelen", "ster", "te", "tel", "ter", "terug", "vree", "we", "zerk",
];

const TEST_STATE: &[&str] = &[
    "    t     c   f",
    "    e    he   o",
    "    r   bis g k",
    "    u  bol te v",
    "    gepof dimme",
    "      la vree e",
    "    qua   ene  ",
    "      Spoelen  ",
    "     s a   n   ",
    "     c d we    ",
    "     hadden    ",
    "    nu o   y   ",
    "  wrat siJzen  ",
    "    k     os   ",
    "   zerk   g    ",
];

/// Load a bincoded trie when a path is given, else build one from the demo words.
fn load_trie(path: Option<String>) -> Result<Trie> {
    match path {
        #[cfg(feature = "bincode")]
        Some(path) => Ok(Trie::deserialize_from(&path)?),
        #[cfg(not(feature = "bincode"))]
        Some(path) => anyhow::bail!("reading '{}' needs the bincode feature", path),
        None => Ok(Trie::from_words(WORDS)?),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let letters = args.next().unwrap_or_else(|| String::from("abel*"));
    let trie = load_trie(args.next())?;
    info!("dictionary: {}", trie);

    let config = Config::wordfeud(Language::NL);
    let mut board = Board::from_strings(config.grid(), TEST_STATE)?;
    let solver = Solver::new(&config, &trie);
    let rack: Rack = letters.parse()?;
    let bag = TileBag::remaining(&config, &board, &rack);
    println!("{} tiles in the bag or on other racks", bag.len());

    let t0 = Instant::now();
    let moves = solver.solve(&board, rack.as_slice())?;
    let dt = t0.elapsed();
    match moves.first() {
        Some(best) => {
            println!(
                "Best move for {}: {} for {} points ({} reused) in {:?}",
                rack,
                best.word(),
                best.points,
                best.number_of_collisions,
                dt
            );
            board.apply(best)?;
            println!("{}", board);
        }
        None => println!("No move for {} ({:?})", rack, dt),
    }
    Ok(())
}
