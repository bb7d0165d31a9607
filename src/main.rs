use anyhow::Result;
use featl::FeatureETL;

const DATA_ROOT: &str = "./data";

fn main() -> Result<()> {
    let hw = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(8);

    let features = FeatureETL::new()
        .data_dir(DATA_ROOT)
        .parallelism(hw)
        .progress(true)
        .progress_label("Extracting features")
        .extract()?;

    let (rows, cols) = features.matrix.shape();
    println!("Number of authors: {}", rows);
    println!(
        "Feature matrix: {} x {} communities ({} nonzeros)",
        rows,
        cols,
        features.matrix.nnz()
    );

    Ok(())
}
