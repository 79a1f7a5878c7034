use mosaic::{MarshalError, Marshaller};
use serde::Serialize;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a rendered SVG document with inspection helpers.
pub struct GeneratedSvg {
    pub text: String,
}

impl GeneratedSvg {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let text = String::from_utf8(bytes)?;
        // Fail early on malformed output.
        roxmltree::Document::parse(&text)?;
        Ok(Self { text })
    }

    fn doc(&self) -> roxmltree::Document<'_> {
        roxmltree::Document::parse(&self.text).expect("validated in from_bytes")
    }

    pub fn root_attr(&self, name: &str) -> Option<String> {
        self.doc().root_element().attribute(name).map(str::to_owned)
    }

    pub fn root_name(&self) -> String {
        self.doc().root_element().tag_name().name().to_owned()
    }

    /// Number of elements named `tag` anywhere in the document.
    pub fn count(&self, tag: &str) -> usize {
        self.doc()
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == tag)
            .count()
    }

    /// Rectangles, circles and polygons.
    pub fn shape_count(&self) -> usize {
        self.count("rect") + self.count("circle") + self.count("polygon")
    }

    /// The `fill` of every element named `tag`, in document order.
    pub fn fills(&self, tag: &str) -> Vec<String> {
        self.doc()
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == tag)
            .filter_map(|n| n.attribute("fill").map(str::to_owned))
            .collect()
    }

    /// The `transform` of every group, in document order.
    pub fn group_transforms(&self) -> Vec<Option<String>> {
        self.doc()
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "g")
            .map(|n| n.attribute("transform").map(str::to_owned))
            .collect()
    }

    /// Save the SVG for manual inspection.
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.svg", name), &self.text)
    }
}

/// Render with an isolated dispatch cache.
pub fn render<T: Serialize + ?Sized>(value: &T, size: f64) -> Result<GeneratedSvg, MarshalError> {
    let marshaller = Marshaller::new().with_cache(Default::default());
    let bytes = marshaller.marshal(value, size)?;
    Ok(GeneratedSvg::from_bytes(bytes).expect("marshal produced invalid SVG"))
}

pub const BLACK: &str = "#000000";
pub const RED: &str = "#ff0000";
