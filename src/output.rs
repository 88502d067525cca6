use crate::path::SamplePath;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Write one path as `t,x,exp_x` rows
pub fn write_path_to_csv(filename: &str, path: &SamplePath) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write_path(&mut file, path)?;
    file.flush()
}

/// Write an ensemble as `t,path_0,path_1,...`; all paths must share one grid
pub fn write_ensemble_to_csv(filename: &str, paths: &[SamplePath]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write_ensemble(&mut file, paths)?;
    file.flush()
}

pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, &str)]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    file.flush()
}

fn write_path<W: Write>(out: &mut W, path: &SamplePath) -> io::Result<()> {
    writeln!(out, "t,x,exp_x")?;
    for (t, x) in path.points() {
        writeln!(out, "{},{},{}", t, x, x.exp())?;
    }
    Ok(())
}

fn write_ensemble<W: Write>(out: &mut W, paths: &[SamplePath]) -> io::Result<()> {
    let Some(first) = paths.first() else {
        return Ok(());
    };
    if paths
        .iter()
        .any(|p| p.len() != first.len() || p.dt() != first.dt())
    {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "ensemble paths do not share a time grid",
        ));
    }

    let header: Vec<String> = (0..paths.len()).map(|i| format!("path_{}", i)).collect();
    writeln!(out, "t,{}", header.join(","))?;
    for (k, t) in first.times().iter().enumerate() {
        let row: Vec<String> = paths.iter().map(|p| p.values()[k].to_string()).collect();
        writeln!(out, "{},{}", t, row.join(","))?;
    }
    Ok(())
}
