//! Defaults shared by the configuration model

/// Configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "richdoc.toml";

/// Rendering defaults (utility class names used by the site's frontend)
pub mod render {
    pub const PARAGRAPH_CLASS: &str = "mb-4 leading-relaxed";

    /// h1 largest/boldest down to h6 smallest
    pub const HEADING_CLASSES: [&str; 6] = [
        "text-4xl font-bold mb-6",
        "text-3xl font-bold mb-5",
        "text-2xl font-semibold mb-4",
        "text-xl font-semibold mb-3",
        "text-lg font-medium mb-2",
        "text-base font-medium mb-2",
    ];

    pub const UNORDERED_LIST_CLASS: &str = "list-disc pl-6 mb-4";
    pub const ORDERED_LIST_CLASS: &str = "list-decimal pl-6 mb-4";
    pub const LINK_CLASS: &str = "text-blue-600 underline";
    pub const IMAGE_CLASS: &str = "max-w-full h-auto my-4";
    pub const TABLE_CLASS: &str = "table-auto border-collapse mb-4";
    pub const TABLE_CELL_CLASS: &str = "border px-4 py-2";
    pub const EMBED_CLASS: &str = "embed-code";
}

/// Block segmentation defaults
pub mod segment {
    /// Paragraphs at or above this many characters are never headings
    pub const HEADING_MAX_CHARS: usize = 100;

    pub const HEADING_LEAD_WORDS: [&str; 10] = [
        "Why", "How", "What", "When", "Where", "Benefits", "Features", "Course", "JEE", "IIT",
    ];
}
