//! Format detection for spreadsheet workbooks.
//!
//! Sniffs the container of a buffer before it reaches the decoder, so a
//! Word document or a random binary fails with a precise message instead of
//! a generic decoder error.

use crate::error::{Error, Result};
use quick_xml::events::Event;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// OLE compound file magic bytes (legacy .xls).
const CFB_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Mimetype entry of an OpenDocument spreadsheet.
const ODS_MIMETYPE: &str = "application/vnd.oasis.opendocument.spreadsheet";

/// Workbook part content types (xlsx, xlsm, xltx, xltm).
const XLSX_CONTENT_TYPES: [&str; 4] = [
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml",
    "application/vnd.ms-excel.sheet.macroEnabled.main+xml",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.template.main+xml",
    "application/vnd.ms-excel.template.macroEnabled.main+xml",
];

/// Workbook part content type for binary workbooks.
const XLSB_CONTENT_TYPE: &str = "application/vnd.ms-excel.sheet.binary.macroEnabled.main";

/// Content type for DOCX main document part.
const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

/// Content type for PPTX presentation part.
const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";

/// Detected spreadsheet format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// Office Open XML workbook (.xlsx, .xlsm)
    Xlsx,
    /// Binary workbook (.xlsb)
    Xlsb,
    /// Legacy BIFF workbook (.xls)
    Xls,
    /// OpenDocument spreadsheet (.ods)
    Ods,
}

impl FormatType {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Xlsx => "xlsx",
            FormatType::Xlsb => "xlsb",
            FormatType::Xls => "xls",
            FormatType::Ods => "ods",
        }
    }

    /// Returns a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            FormatType::Xlsx => "Excel Workbook",
            FormatType::Xlsb => "Excel Binary Workbook",
            FormatType::Xls => "Excel 97-2003 Workbook",
            FormatType::Ods => "OpenDocument Spreadsheet",
        }
    }
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the format type from a file path.
pub fn detect_format_from_path(path: impl AsRef<Path>) -> Result<FormatType> {
    let mut file = File::open(path.as_ref())?;
    let mut magic = [0u8; 8];
    let read = file.read(&mut magic)?;
    file.rewind()?;

    if is_cfb_file(&magic[..read]) {
        return Ok(FormatType::Xls);
    }
    if !is_zip_file(&magic[..read]) {
        return Err(Error::UnknownFormat);
    }
    detect_format_from_reader(BufReader::new(file))
}

/// Detect the format type from a byte slice.
///
/// # Example
///
/// ```no_run
/// use sheetview::detect::detect_format_from_bytes;
///
/// let data = std::fs::read("people.xlsx")?;
/// let format = detect_format_from_bytes(&data)?;
/// println!("{}", format);
/// # Ok::<(), sheetview::Error>(())
/// ```
pub fn detect_format_from_bytes(data: &[u8]) -> Result<FormatType> {
    if is_cfb_file(data) {
        return Ok(FormatType::Xls);
    }
    if !is_zip_file(data) {
        return Err(Error::UnknownFormat);
    }

    detect_format_from_reader(std::io::Cursor::new(data))
}

/// Detect the format type of a ZIP-based workbook from a reader.
pub fn detect_format_from_reader<R: Read + Seek>(reader: R) -> Result<FormatType> {
    let mut archive = zip::ZipArchive::new(reader)?;

    if let Some(mimetype) = read_entry(&mut archive, "mimetype")? {
        return if mimetype.trim() == ODS_MIMETYPE {
            Ok(FormatType::Ods)
        } else {
            Err(Error::UnsupportedFormat(mimetype.trim().to_string()))
        };
    }

    match read_entry(&mut archive, "[Content_Types].xml")? {
        Some(xml) => match classify_content_types(&content_types(&xml)?) {
            Some(format) => format,
            None => detect_by_folder_structure(&mut archive),
        },
        None => detect_by_folder_structure(&mut archive),
    }
}

/// Map the declared part content types to a format, if any is decisive.
fn classify_content_types(types: &[String]) -> Option<Result<FormatType>> {
    let has = |wanted: &str| types.iter().any(|t| t == wanted);

    if XLSX_CONTENT_TYPES.iter().any(|&t| has(t)) {
        Some(Ok(FormatType::Xlsx))
    } else if has(XLSB_CONTENT_TYPE) {
        Some(Ok(FormatType::Xlsb))
    } else if has(DOCX_CONTENT_TYPE) {
        Some(Err(Error::UnsupportedFormat("Word Document".to_string())))
    } else if has(PPTX_CONTENT_TYPE) {
        Some(Err(Error::UnsupportedFormat(
            "PowerPoint Presentation".to_string(),
        )))
    } else {
        None
    }
}

/// Collect every `ContentType` attribute declared in `[Content_Types].xml`.
fn content_types(xml: &str) -> Result<Vec<String>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut types = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(e)) | Ok(Event::Start(e)) => {
                let name = e.name();
                if name.as_ref() == b"Override" || name.as_ref() == b"Default" {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"ContentType" {
                            types.push(String::from_utf8_lossy(&attr.value).to_string());
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(types)
}

/// Read a ZIP entry as text, or `None` when the archive does not contain it.
fn read_entry<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
    name: &str,
) -> Result<Option<String>> {
    match archive.by_name(name) {
        Ok(mut file) => {
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)?;
            Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
        }
        Err(zip::result::ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Fallback detection by checking folder structure.
fn detect_by_folder_structure<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
) -> Result<FormatType> {
    let names: Vec<String> = archive.file_names().map(String::from).collect();

    let has_xl = names.iter().any(|n| n.starts_with("xl/"));
    let has_binary_workbook = names.iter().any(|n| n == "xl/workbook.bin");

    match (has_xl, has_binary_workbook) {
        (true, true) => Ok(FormatType::Xlsb),
        (true, false) => Ok(FormatType::Xlsx),
        _ => Err(Error::UnknownFormat),
    }
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}

/// Check if data starts with the OLE compound file signature.
pub fn is_cfb_file(data: &[u8]) -> bool {
    data.len() >= 8 && data[..8] == CFB_MAGIC
}
