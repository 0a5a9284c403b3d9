use super::*;

/// A decoded PNG chunk of any of the standard types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(nonstandard_style)]
pub enum PngChunk<'b> {
  /// Image Header
  IHDR(IHDR),
  /// Palette
  PLTE(PLTE<'b>),
  /// Image Data
  IDAT(IDAT<'b>),
  /// Image End
  IEND,
  /// Transparency
  tRNS(tRNS<'b>),
  /// Chromaticities
  cHRM(cHRM),
  /// Gamma value times 100,000.
  gAMA(gAMA),
  /// ICC profile
  iCCP(iCCP<'b>),
  /// Significant bits
  sBIT(sBIT),
  /// sRGB Info
  sRGB(sRGB),
  /// Text
  tEXt(tEXt<'b>),
  /// Compressed text
  zTXt(zTXt<'b>),
  /// International text
  iTXt(iTXt<'b>),
  /// Background color
  bKGD(bKGD),
  /// Histogram
  hIST(hIST<'b>),
  /// Physical pixel size
  pHYs(pHYs),
  /// Suggested palette
  sPLT(sPLT<'b>),
  /// Modification time
  tIME(tIME),
  /// Any chunk type without a decoder here.
  Unrecognized(ChunkType),
}
impl<'b> PngChunk<'b> {
  /// Decodes a chunk according to its type code.
  ///
  /// The color type is only needed for `tRNS`, `sBIT`, `bKGD`, and `hIST`.
  /// Passing `None` makes those chunk types fail with
  /// [`DecodeError::HeaderUnavailable`], while everything else decodes fine.
  pub fn decode(raw: &'b RawPngChunk, color_type: Option<ColorType>) -> PngResult<Self> {
    let color_type = || color_type.ok_or(DecodeError::HeaderUnavailable { chunk_ty: raw.chunk_ty });
    Ok(match raw.chunk_ty {
      ChunkType::IHDR => PngChunk::IHDR(IHDR::try_from(raw)?),
      ChunkType::PLTE => PngChunk::PLTE(PLTE::try_from(raw)?),
      ChunkType::IDAT => PngChunk::IDAT(IDAT::try_from(raw)?),
      ChunkType::IEND => {
        IEND::try_from(raw)?;
        PngChunk::IEND
      }
      ChunkType::tRNS => PngChunk::tRNS(tRNS::decode(raw, color_type()?)?),
      ChunkType::cHRM => PngChunk::cHRM(cHRM::try_from(raw)?),
      ChunkType::gAMA => PngChunk::gAMA(gAMA::try_from(raw)?),
      ChunkType::iCCP => PngChunk::iCCP(iCCP::try_from(raw)?),
      ChunkType::sBIT => PngChunk::sBIT(sBIT::decode(raw, color_type()?)?),
      ChunkType::sRGB => PngChunk::sRGB(sRGB::try_from(raw)?),
      ChunkType::tEXt => PngChunk::tEXt(tEXt::try_from(raw)?),
      ChunkType::zTXt => PngChunk::zTXt(zTXt::try_from(raw)?),
      ChunkType::iTXt => PngChunk::iTXt(iTXt::try_from(raw)?),
      ChunkType::bKGD => PngChunk::bKGD(bKGD::decode(raw, color_type()?)?),
      ChunkType::hIST => PngChunk::hIST(hIST::decode(raw, color_type()?)?),
      ChunkType::pHYs => PngChunk::pHYs(pHYs::try_from(raw)?),
      ChunkType::sPLT => PngChunk::sPLT(sPLT::try_from(raw)?),
      ChunkType::tIME => PngChunk::tIME(tIME::try_from(raw)?),
      other => PngChunk::Unrecognized(other),
    })
  }
}
