use concordance::pipeline::archive::DirArchive;
use concordance::pipeline::runner::{IndexPipeline, PipelineConfig};
use concordance::query::engine::QueryEngine;
use concordance::query::types::ANY;
use concordance::store::memory::IndexStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} --data <dir> [--shards <n>] [--query <word> [--work <title>] [--character <name>]]",
            args[0]
        );
        eprintln!("Example: {} --data corpus/ --query love", args[0]);
        eprintln!(
            "Example: {} --data corpus/ --query love --work \"Romeo And Juliet\"",
            args[0]
        );
        std::process::exit(1);
    }

    let mut data_dir: Option<String> = None;
    let mut shards: usize = 16;
    let mut query: Option<String> = None;
    let mut work_filter = ANY.to_string();
    let mut character_filter = ANY.to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" => {
                data_dir = Some(args[i + 1].clone());
                i += 2;
            }
            "--shards" => {
                shards = args[i + 1].parse()?;
                i += 2;
            }
            "--query" => {
                query = Some(args[i + 1].clone());
                i += 2;
            }
            "--work" => {
                work_filter = args[i + 1].clone();
                i += 2;
            }
            "--character" => {
                character_filter = args[i + 1].clone();
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let data_dir = data_dir.expect("--data is required");

    let store = IndexStore::new();
    let pipeline = IndexPipeline::new(store.clone(), PipelineConfig { shards });

    let archive = DirArchive::new(&data_dir);
    let report = pipeline.build(&archive).await?;
    tracing::info!(
        "Indexed {} files ({} degraded), {} distinct words",
        report.files,
        report.degraded_files,
        store.len()
    );

    if let Some(term) = query {
        let engine = QueryEngine::new(store);
        let results = engine.search(&term, &work_filter, &character_filter);

        println!("'{}': {} occurrences", results.term, results.total_count);
        for work in &results.works {
            println!("\n{}", work.title);
            for character in &work.characters {
                println!("  {}", character.name);
                for line in &character.lines {
                    println!("    {}", line);
                }
            }
        }
        if let Some(suggestion) = &results.suggestion {
            println!("Did you mean '{}'?", suggestion);
        }
        if results.is_empty() && results.suggestion.is_none() {
            println!("No results.");
        }
    }

    Ok(())
}
