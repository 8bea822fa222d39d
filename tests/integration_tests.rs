//! Integration tests for the full regeneration pipeline
//!
//! These drive `run_generation` end to end against a temp-dir fixture of the
//! libxml2 documentation tree and two marker-carrying target files.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use xmlerrgen::cli::commands;

/// A miniature `html/libxml-xmlerror.html` with the three expected enums.
const DOC_HTML: &str = r##"<html xmlns="http://www.w3.org/1999/xhtml"><body>
<pre class="programlisting">void	<a href="#xmlResetError">xmlResetError</a>	(xmlErrorPtr err)</pre>
<pre class="programlisting">Enum xmlErrorLevel {
    <a name="XML_ERR_NONE" id="XML_ERR_NONE">XML_ERR_NONE</a> = 0
    <a name="XML_ERR_WARNING" id="XML_ERR_WARNING">XML_ERR_WARNING</a> = 1 : A simple warning
    <a name="XML_ERR_ERROR" id="XML_ERR_ERROR">XML_ERR_ERROR</a> = 2 : A recoverable error
    <a name="XML_ERR_FATAL" id="XML_ERR_FATAL">XML_ERR_FATAL</a> = 3 : A fatal error
}
</pre>
<pre class="programlisting">Enum xmlErrorDomain {
    <a name="XML_FROM_NONE" id="XML_FROM_NONE">XML_FROM_NONE</a> = 0
    <a name="XML_FROM_PARSER" id="XML_FROM_PARSER">XML_FROM_PARSER</a> = 1 : The XML parser
    <a name="XML_FROM_TREE" id="XML_FROM_TREE">XML_FROM_TREE</a> = 2 : The tree module
}
</pre>
<pre class="programlisting">Enum xmlParserErrors {
    <a name="XML_ERR_OK" id="XML_ERR_OK">XML_ERR_OK</a> = 0
    <a name="XML_ERR_INTERNAL_ERROR" id="XML_ERR_INTERNAL_ERROR">XML_ERR_INTERNAL_ERROR</a> = 1 : internal error
    <a name="XML_ERR_NO_MEMORY" id="XML_ERR_NO_MEMORY">XML_ERR_NO_MEMORY</a> = 2 : Out of memory error
}
</pre>
</body></html>"##;

const PXI_TEMPLATE: &str = "\
# hand-written pxi header

# BEGIN: GENERATED CONSTANTS
STALE_CONSTANTS
# END: GENERATED CONSTANTS

# hand-written pxi trailer
";

const PXD_TEMPLATE: &str = "\
# hand-written pxd header

# BEGIN: GENERATED CONSTANTS
STALE_DECLARATIONS
# END: GENERATED CONSTANTS

# hand-written pxd trailer
";

static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

/// A fixture documentation tree plus the two target files, in a unique
/// scratch directory.
struct Fixture {
    root: PathBuf,
    constants_file: PathBuf,
    declarations_file: PathBuf,
}

impl Fixture {
    fn new(doc_html: Option<&str>) -> Self {
        let root = std::env::temp_dir().join(format!(
            "xmlerrgen_it_{}_{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::SeqCst)
        ));
        fs::create_dir_all(root.join("html")).unwrap();
        if let Some(html) = doc_html {
            fs::write(root.join("html/libxml-xmlerror.html"), html).unwrap();
        }

        let constants_file = root.join("xmlerror.pxi");
        let declarations_file = root.join("xmlerror.pxd");
        fs::write(&constants_file, PXI_TEMPLATE).unwrap();
        fs::write(&declarations_file, PXD_TEMPLATE).unwrap();

        Self {
            root,
            constants_file,
            declarations_file,
        }
    }

    fn generate(&self) -> Result<(), String> {
        commands::run_generation(&self.root, &self.constants_file, &self.declarations_file)
            .map(|_| ())
            .map_err(|e| e.message)
    }

    fn constants(&self) -> String {
        fs::read_to_string(&self.constants_file).unwrap()
    }

    fn declarations(&self) -> String {
        fs::read_to_string(&self.declarations_file).unwrap()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

#[test]
fn test_end_to_end_generation() {
    let fixture = Fixture::new(Some(DOC_HTML));
    fixture.generate().unwrap();

    let constants = fixture.constants();
    assert!(constants.contains("cdef object __ERROR_LEVELS"));
    assert!(constants.contains("NONE=0\nWARNING=1\nERROR=2\nFATAL=3"));
    assert!(constants.contains("cdef object __ERROR_DOMAINS"));
    assert!(constants.contains("NONE=0\nPARSER=1\nTREE=2"));
    // xmlParserErrors strips only the XML_ prefix
    assert!(constants.contains("ERR_OK=0\nERR_INTERNAL_ERROR=1\nERR_NO_MEMORY=2"));
    assert!(!constants.contains("STALE_CONSTANTS"));

    let declarations = fixture.declarations();
    assert!(declarations.contains("cdef extern from \"libxml/xmlerror.h\":"));
    assert!(declarations.contains("    ctypedef enum xmlParserErrors:"));
    // Exact 50/7 column alignment, never prefix-stripped
    assert!(declarations.contains(
        "        XML_ERR_NONE                                       =       0\n"
    ));
    assert!(declarations.contains(
        "        XML_ERR_WARNING                                    =       1 # A simple warning\n"
    ));
    assert!(!declarations.contains("STALE_DECLARATIONS"));
}

#[test]
fn test_hand_written_content_preserved() {
    let fixture = Fixture::new(Some(DOC_HTML));
    fixture.generate().unwrap();

    for content in [fixture.constants(), fixture.declarations()] {
        assert!(content.starts_with("# hand-written"));
        assert!(content.contains("# BEGIN: GENERATED CONSTANTS\n"));
        assert!(content.contains("# END: GENERATED CONSTANTS\n"));
        assert!(content.ends_with("trailer\n"));
        assert!(content.contains("# This section is generated by the script 'xmlerrgen'."));
    }
}

#[test]
fn test_generation_is_idempotent() {
    let fixture = Fixture::new(Some(DOC_HTML));
    fixture.generate().unwrap();
    let constants_once = fixture.constants();
    let declarations_once = fixture.declarations();

    fixture.generate().unwrap();
    assert_eq!(fixture.constants(), constants_once);
    assert_eq!(fixture.declarations(), declarations_once);
}

#[test]
fn test_missing_expected_enum_leaves_targets_untouched() {
    // Drop the xmlParserErrors block from the documentation
    let truncated = {
        let start = DOC_HTML.find("<pre class=\"programlisting\">Enum xmlParserErrors").unwrap();
        format!("{}</body></html>", &DOC_HTML[..start])
    };
    let fixture = Fixture::new(Some(&truncated));

    let message = fixture.generate().unwrap_err();
    assert!(message.contains("xmlParserErrors"));
    assert_eq!(fixture.constants(), PXI_TEMPLATE);
    assert_eq!(fixture.declarations(), PXD_TEMPLATE);
}

#[test]
fn test_missing_documentation_file_fails_before_parsing() {
    let fixture = Fixture::new(None);
    let message = fixture.generate().unwrap_err();
    assert!(message.contains("libxml-xmlerror.html"));
    assert_eq!(fixture.constants(), PXI_TEMPLATE);
}

#[test]
fn test_target_without_markers_fails() {
    let fixture = Fixture::new(Some(DOC_HTML));
    fs::write(&fixture.constants_file, "# no markers here\n").unwrap();

    let message = fixture.generate().unwrap_err();
    assert!(message.contains("BEGIN: GENERATED CONSTANTS"));
    // The declarations file was never reached
    assert_eq!(fixture.declarations(), PXD_TEMPLATE);
}
