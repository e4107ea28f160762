use std::path::Path;

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::wadl::WadlDocument;

/// Memory-maps a WADL file and hands it to the XML parser.
pub struct WadlLoader {
  file: AsyncMmapFile,
}

impl WadlLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path).await?;

    Ok(Self { file })
  }

  pub fn parse(&self) -> anyhow::Result<WadlDocument> {
    let content = std::str::from_utf8(self.file.as_slice())?;
    Ok(WadlDocument::parse(content)?)
  }
}
