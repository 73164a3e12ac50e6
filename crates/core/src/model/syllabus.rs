use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Language;

/// Exam subjects offered on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Physics,
    Chemistry,
    Botany,
    Zoology,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown subject: {0}")]
pub struct UnknownSubject(pub String);

/// One syllabus chapter with its English name and Hindi label.
///
/// The English name is what the backend receives regardless of medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chapter {
    english: &'static str,
    hindi: &'static str,
}

impl Chapter {
    const fn new(english: &'static str, hindi: &'static str) -> Self {
        Self { english, hindi }
    }

    #[must_use]
    pub fn value(&self) -> &'static str {
        self.english
    }

    #[must_use]
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.english,
            Language::Hindi => self.hindi,
        }
    }
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Physics,
        Subject::Chemistry,
        Subject::Botany,
        Subject::Zoology,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Botany => "botany",
            Subject::Zoology => "zoology",
        }
    }

    /// Name sent to the backend and shown as the quiz title.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Botany => "Botany",
            Subject::Zoology => "Zoology",
        }
    }

    #[must_use]
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (subject, Language::English) => subject.name(),
            (Subject::Physics, Language::Hindi) => "भौतिकी",
            (Subject::Chemistry, Language::Hindi) => "रसायन विज्ञान",
            (Subject::Botany, Language::Hindi) => "वनस्पति विज्ञान",
            (Subject::Zoology, Language::Hindi) => "प्राणि विज्ञान",
        }
    }

    #[must_use]
    pub fn chapters(self) -> &'static [Chapter] {
        match self {
            Subject::Physics => PHYSICS,
            Subject::Chemistry => CHEMISTRY,
            Subject::Botany => BOTANY,
            Subject::Zoology => ZOOLOGY,
        }
    }

    /// Look up a chapter by its English name.
    #[must_use]
    pub fn chapter(self, value: &str) -> Option<&'static Chapter> {
        self.chapters().iter().find(|chapter| chapter.value() == value)
    }
}

impl FromStr for Subject {
    type Err = UnknownSubject;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.key().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| UnknownSubject(raw.to_string()))
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Syllabus ──────────────────────────────────────────────────────────────────

const PHYSICS: &[Chapter] = &[
    Chapter::new("Physics and Measurement", "भौतिकी और मापन"),
    Chapter::new("Kinematics", "गतिकी"),
    Chapter::new("Laws of Motion", "गति के नियम"),
    Chapter::new("Work, Energy, and Power", "कार्य, ऊर्जा और शक्ति"),
    Chapter::new("Rotational Motion", "घूर्णी गति"),
    Chapter::new("Gravitation", "गुरुत्वाकर्षण"),
    Chapter::new("Properties of Solids and Liquids", "ठोस और तरल पदार्थों के गुण"),
    Chapter::new("Thermodynamics", "ऊष्मप्रवैगिकी"),
    Chapter::new("Kinetic Theory of Gases", "गैसों का अणुगति सिद्धांत"),
    Chapter::new("Oscillations and Waves", "दोलन और तरंगें"),
    Chapter::new("Electrostatics", "स्थिरवैद्युतिकी"),
    Chapter::new("Current Electricity", "विद्युत धारा"),
    Chapter::new("Magnetic Effects of Current and Magnetism", "धारा और चुंबकत्व के चुंबकीय प्रभाव"),
    Chapter::new("Electromagnetic Induction and Alternating Currents", "विद्युत चुंबकीय प्रेरण और प्रत्यावर्ती धाराएं"),
    Chapter::new("Electromagnetic Waves", "विद्युत चुम्बकीय तरंगें"),
    Chapter::new("Optics", "प्रकाशिकी"),
    Chapter::new("Dual Nature of Matter and Radiation", "द्रव्य और विकिरण की द्वैत प्रकृति"),
    Chapter::new("Atoms and Nuclei", "परमाणु और नाभिक"),
    Chapter::new("Electronic Devices", "इलेक्ट्रॉनिक उपकरण"),
    Chapter::new("Experimental Skills", "प्रायोगिक कौशल"),
];

const CHEMISTRY: &[Chapter] = &[
    Chapter::new("Some Basic Concepts in Chemistry", "रसायन विज्ञान की कुछ मूल अवधारणाएँ"),
    Chapter::new("Atomic Structure", "परमाणु संरचना"),
    Chapter::new("Chemical Bonding and Molecular Structure", "रासायनिक आबंधन और आणविक संरचना"),
    Chapter::new("Chemical Thermodynamics", "रासायनिक ऊष्मप्रवैगिकी"),
    Chapter::new("Solutions", "विलयन"),
    Chapter::new("Equilibrium", "साम्यावस्था"),
    Chapter::new("Redox Reactions and Electrochemistry", "अपचयोपचय अभिक्रियाएँ और वैद्युतरसायन"),
    Chapter::new("Chemical Kinetics", "रासायनिक गतिकी"),
    Chapter::new("Classification of Elements and Periodicity in Properties", "तत्वों का वर्गीकरण और गुणधर्मों में आवर्तिता"),
    Chapter::new("p-Block Elements", "p-ब्लॉक के तत्व"),
    Chapter::new("d- and f-Block Elements", "d- और f-ब्लॉक के तत्व"),
    Chapter::new("Co-ordination Compounds", "उपसहसंयोजन यौगिक"),
    Chapter::new("Purification and Characterisation of Organic Compounds", "कार्बनिक यौगिकों का शोधन और अभिलक्षणन"),
    Chapter::new("Some Basic Principles of Organic Chemistry", "कार्बनिक रसायन के कुछ मूल सिद्धांत"),
    Chapter::new("Hydrocarbons", "हाइड्रोकार्बन"),
    Chapter::new("Organic Compounds Containing Halogens", "हैलोजन युक्त कार्बनिक यौगिक"),
    Chapter::new("Organic Compounds Containing Oxygen", "ऑक्सीजन युक्त कार्बनिक यौगिक"),
    Chapter::new("Organic Compounds Containing Nitrogen", "नाइट्रोजन युक्त कार्बनिक यौगिक"),
    Chapter::new("Biomolecules", "जैव अणु"),
    Chapter::new("Principles Related to Practical Chemistry", "प्रायोगिक रसायन से संबंधित सिद्धांत"),
];

const BOTANY: &[Chapter] = &[
    Chapter::new("The Living World", "जीव जगत"),
    Chapter::new("Biological Classification", "जीव जगत का वर्गीकरण"),
    Chapter::new("Plant Kingdom", "वनस्पति जगत"),
    Chapter::new("Morphology of Flowering Plants", "पुष्पी पादपों की आकारिकी"),
    Chapter::new("Anatomy of Flowering Plants", "पुष्पी पादपों का शारीर"),
    Chapter::new("Cell: The Unit of Life", "कोशिका: जीवन की इकाई"),
    Chapter::new("Cell Cycle and Cell Division", "कोशिका चक्र और कोशिका विभाजन"),
    Chapter::new("Photosynthesis in Higher Plants", "उच्च पादपों में प्रकाश संश्लेषण"),
    Chapter::new("Respiration in Plants", "पादपों में श्वसन"),
    Chapter::new("Plant Growth and Development", "पादप वृद्धि एवं परिवर्धन"),
    Chapter::new("Transport in Plants", "पौधों में परिवहन"),
    Chapter::new("Mineral Nutrition", "खनिज पोषण"),
    Chapter::new("Sexual Reproduction in Flowering Plants", "पुष्पी पादपों में लैंगिक जनन"),
    Chapter::new("Principles of Inheritance and Variation", "वंशागति तथा विविधता के सिद्धांत"),
    Chapter::new("Molecular Basis of Inheritance", "वंशागति का आणविक आधार"),
    Chapter::new("Evolution", "विकास"),
    Chapter::new("Microbes in Human Welfare", "मानव कल्याण में सूक्ष्मजीव"),
    Chapter::new("Biotechnology: Principles and Processes", "जैव प्रौद्योगिकी - सिद्धांत व प्रक्रम"),
    Chapter::new("Biotechnology and its Applications", "जैव प्रौद्योगिकी एवं उसके उपयोग"),
    Chapter::new("Organisms and Populations", "जीव और समष्टियाँ"),
    Chapter::new("Ecosystem", "पारितंत्र"),
    Chapter::new("Biodiversity and Conservation", "जैव विविधता एवं संरक्षण"),
    Chapter::new("Environmental Issues", "पर्यावरण के मुद्दे"),
];

const ZOOLOGY: &[Chapter] = &[
    Chapter::new("Animal Kingdom", "प्राणि जगत"),
    Chapter::new("Structural Organisation in Animals", "प्राणियों में संरचनात्मक संगठन"),
    Chapter::new("Digestion and Absorption", "पाचन एवं अवशोषण"),
    Chapter::new("Breathing and Exchange of Gases", "श्वसन और गैसों का विनिमय"),
    Chapter::new("Body Fluids and Circulation", "शरीर द्रव तथा परिसंचरण"),
    Chapter::new("Excretory Products and their Elimination", "उत्सर्जी उत्पाद एवं उनका निष्कासन"),
    Chapter::new("Locomotion and Movement", "गमन एवं संचलन"),
    Chapter::new("Neural Control and Coordination", "तंत्रिकीय नियंत्रण एवं समन्वय"),
    Chapter::new("Chemical Coordination and Integration", "रासायनिक समन्वय तथा एकीकरण"),
    Chapter::new("Biomolecules", "जैव अणु"),
    Chapter::new("Human Reproduction", "मानव जनन"),
    Chapter::new("Reproductive Health", "जनन स्वास्थ्य"),
    Chapter::new("Genetics and Evolution", "आनुवंशिकी तथा विकास"),
    Chapter::new("Human Health and Disease", "मानव स्वास्थ्य तथा रोग"),
    Chapter::new("Immunology (as part of Human Health and Disease)", "प्रतिरक्षा विज्ञान (मानव स्वास्थ्य तथा रोग का हिस्सा)"),
];
