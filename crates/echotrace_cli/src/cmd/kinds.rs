use echotrace::view::{AnalysisKind, Result};

/// Print every analysis kind name with its card title.
pub fn run() -> Result<()> {
	for kind in AnalysisKind::ALL {
		println!("{:<14} {}", kind.name(), kind.title());
	}
	Ok(())
}
