//! Key templates
//!
//! Fixed catalog of 24 scale templates: 12 major keys (Ionian rotation of
//! the tonic) followed by 12 natural-minor keys (Aeolian rotation). The
//! catalog order doubles as the tie-break order in the detector, so it is
//! part of the contract: majors first, then minors, each in the order
//! listed here.

/// Sharp-spelled pitch-class names, used for rendering scale notes
pub const PITCH_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Ionian (major) scale steps in semitones from the tonic
const IONIAN_STEPS: [usize; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Aeolian (natural minor) scale steps in semitones from the tonic
const AEOLIAN_STEPS: [usize; 7] = [0, 2, 3, 5, 7, 8, 10];

/// Major keys in catalog order: (name, tonic pitch class)
const MAJOR_KEYS: [(&str, usize); 12] = [
    ("C", 0),
    ("G", 7),
    ("D", 2),
    ("A", 9),
    ("E", 4),
    ("B", 11),
    ("F#", 6),
    ("C#", 1),
    ("F", 5),
    ("Bb", 10),
    ("Eb", 3),
    ("Ab", 8),
];

/// Natural-minor keys in catalog order: (name, tonic pitch class)
const MINOR_KEYS: [(&str, usize); 12] = [
    ("Am", 9),
    ("Em", 4),
    ("Bm", 11),
    ("F#m", 6),
    ("C#m", 1),
    ("G#m", 8),
    ("D#m", 3),
    ("A#m", 10),
    ("Dm", 2),
    ("Gm", 7),
    ("Cm", 0),
    ("Fm", 5),
];

/// One scale template: a named set of 7 pitch classes
#[derive(Debug, Clone)]
pub struct KeyTemplate {
    /// Key name, minor keys suffixed with "m" (e.g. "Bb", "F#m")
    pub name: &'static str,

    /// Scale pitch classes in tonic-first rotation order
    pub scale: [usize; 7],

    /// Binary indicator vector (1.0 where the pitch class is in scale)
    pub vector: [f32; 12],
}

/// The fixed 24-entry key template catalog
#[derive(Debug, Clone)]
pub struct KeyTemplates {
    templates: Vec<KeyTemplate>,
}

impl KeyTemplates {
    /// Build the catalog: 12 major keys then 12 natural-minor keys
    pub fn new() -> Self {
        let mut templates = Vec::with_capacity(24);
        for &(name, tonic) in &MAJOR_KEYS {
            templates.push(build_template(name, tonic, &IONIAN_STEPS));
        }
        for &(name, tonic) in &MINOR_KEYS {
            templates.push(build_template(name, tonic, &AEOLIAN_STEPS));
        }
        Self { templates }
    }

    /// Templates in catalog (tie-break) order
    pub fn iter(&self) -> std::slice::Iter<'_, KeyTemplate> {
        self.templates.iter()
    }

    /// Look up a template by key name
    pub fn get(&self, name: &str) -> Option<&KeyTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Number of templates (always 24)
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True when the catalog is empty (never, in practice)
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Sharp-spelled note names of a key's scale, tonic first
    ///
    /// Empty when the key name is not in the catalog.
    pub fn scale_note_names(&self, name: &str) -> Vec<String> {
        self.get(name)
            .map(|t| t.scale.iter().map(|&pc| PITCH_NAMES[pc].to_string()).collect())
            .unwrap_or_default()
    }
}

impl Default for KeyTemplates {
    fn default() -> Self {
        Self::new()
    }
}

fn build_template(name: &'static str, tonic: usize, steps: &[usize; 7]) -> KeyTemplate {
    let mut scale = [0usize; 7];
    let mut vector = [0.0f32; 12];
    for (slot, &step) in scale.iter_mut().zip(steps.iter()) {
        let pc = (tonic + step) % 12;
        *slot = pc;
        vector[pc] = 1.0;
    }
    KeyTemplate {
        name,
        scale,
        vector,
    }
}
