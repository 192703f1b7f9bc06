use anyhow::Result;
use genie_config::Config;
use genie_sources::Flattener;

use crate::cli::SourceArgs;
use crate::commands::build_tree;

pub async fn handle(path: &str, recursive: bool, source: &SourceArgs, config: &Config) -> Result<()> {
    let tree = build_tree(source, config)?;

    if recursive {
        let files = Flattener::new(tree.as_ref())
            .with_max_depth(config.export.max_depth)
            .flatten(path)
            .await;

        for file in &files {
            println!("{}", file.path);
        }
        println!("\n{} files", files.len());
        return Ok(());
    }

    let listing = tree.list(path).await?;
    println!("{}:", listing.path);

    if listing.items.is_empty() {
        println!("  (empty)");
    }
    for item in &listing.items {
        if item.is_dir {
            println!("  {}/", item.name);
        } else {
            match item.size {
                Some(size) if size > 0 => println!("  {} ({} bytes)", item.name, size),
                _ => println!("  {}", item.name),
            }
        }
    }

    Ok(())
}
