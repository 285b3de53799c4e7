use crate::cli::PlaceIdArgs;
use crate::error::LocationError;
use crate::location::{embed_url, extract_place_id};

pub fn execute(args: PlaceIdArgs) -> anyhow::Result<()> {
    let place_id = extract_place_id(&args.url)
        .ok_or_else(|| LocationError::UnrecognisedUrl(args.url.clone()))?;
    println!("{}", place_id);

    if let Some(ref key) = args.embed_key {
        if let Some(url) = embed_url(&args.url, key) {
            println!("{}", url);
        }
    }

    Ok(())
}
