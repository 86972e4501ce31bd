use anyhow::Result;

use super::target::AndroidTarget;

pub(crate) fn run() -> Result<()> {
    print!("{}", table());
    Ok(())
}

fn table() -> String {
    let mut out = format!(
        "{:<6} {:<24} {:<12} {:<4} {}\n",
        "name", "triple", "abi", "api", "features"
    );
    for t in AndroidTarget::ALL {
        let spec = t.spec();
        out.push_str(&format!(
            "{:<6} {:<24} {:<12} {:<4} {}\n",
            t.cli_name(),
            spec.triple(),
            t.abi(),
            spec.platform,
            spec.features.joined()
        ));
    }
    out
}
