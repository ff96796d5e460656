//! Recognised dataset columns and the selector options built on them.

/// Every column the chart knows how to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
	/// Unique record key. Rows without one are not drawn.
	Id,
	/// Title of the work.
	Title,
	/// Publication year.
	YearPublished,
	/// First listed author.
	PrimaryAuthor,
	/// Works cited by this one.
	Cites,
	/// External citations of this work.
	CitedBy,
	/// Total works published by the primary author.
	AuthorTotalWorksCount,
	/// Where the research took place.
	ResearchLocations,
	/// Kind of study.
	ResearchType,
	/// Method used.
	ResearchMethod,
	/// Population size label, ordered by [`POPULATION_SCALE_ORDER`].
	ResearchMethodPopulationScale,
	/// Category that colours and clusters the node.
	SocialDeterminantCategory,
	/// Main determinant; equal values are linked.
	PrimaryDeterminantAnalyzed,
	/// First secondary determinant.
	SecondaryDeterminantAnalyzed1,
	/// Second secondary determinant.
	SecondaryDeterminantAnalyzed2,
	/// Third secondary determinant.
	SecondaryDeterminantAnalyzed3,
	/// Sustainable development goal the work aligns with.
	AlignedSdg,
	/// Harm level, e.g. `High Harm`.
	HarmMagnitude,
	/// Harm level for the affected population.
	HarmPopulationImpact,
}

impl Column {
	/// Every column, in dataset order.
	pub const ALL: [Column; 19] = [
		Column::Id,
		Column::Title,
		Column::YearPublished,
		Column::PrimaryAuthor,
		Column::Cites,
		Column::CitedBy,
		Column::AuthorTotalWorksCount,
		Column::ResearchLocations,
		Column::ResearchType,
		Column::ResearchMethod,
		Column::ResearchMethodPopulationScale,
		Column::SocialDeterminantCategory,
		Column::PrimaryDeterminantAnalyzed,
		Column::SecondaryDeterminantAnalyzed1,
		Column::SecondaryDeterminantAnalyzed2,
		Column::SecondaryDeterminantAnalyzed3,
		Column::AlignedSdg,
		Column::HarmMagnitude,
		Column::HarmPopulationImpact,
	];

	/// Header of the column in the dataset.
	pub fn name(self) -> &'static str {
		match self {
			Self::Id => "ID",
			Self::Title => "Title",
			Self::YearPublished => "Year Published",
			Self::PrimaryAuthor => "Primary Author",
			Self::Cites => "Cites",
			Self::CitedBy => "Cited By",
			Self::AuthorTotalWorksCount => "Author Total Works Count",
			Self::ResearchLocations => "Research Locations",
			Self::ResearchType => "Research Type",
			Self::ResearchMethod => "Research Method",
			Self::ResearchMethodPopulationScale => "Research Method Population Scale",
			Self::SocialDeterminantCategory => "Social Determinant Category",
			Self::PrimaryDeterminantAnalyzed => "Primary Determinant Analyzed",
			Self::SecondaryDeterminantAnalyzed1 => "Secondary Determinant Analyzed 1",
			Self::SecondaryDeterminantAnalyzed2 => "Secondary Determinant Analyzed 2",
			Self::SecondaryDeterminantAnalyzed3 => "Secondary Determinant Analyzed 3",
			Self::AlignedSdg => "Aligned SDG",
			Self::HarmMagnitude => "Harm Magnitude",
			Self::HarmPopulationImpact => "Harm Population Impact",
		}
	}

	/// Exact, case-sensitive lookup by header.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|column| column.name() == name)
	}
}

/// How a size attribute's raw values become numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
	/// Five fixed labels, ranked by [`POPULATION_SCALE_ORDER`].
	FixedOrdinal,
	/// Low/medium/high labels ranked by their first two words.
	HarmLevel,
	/// Numbers, possibly with thousands separators.
	Numeric,
}

/// Population scale labels, smallest first.
pub const POPULATION_SCALE_ORDER: [&str; 5] = ["Very Small", "Small", "Medium", "Large", "Very Large"];
/// Harm levels, lowest first. Matched against the first two words of a value.
pub const HARM_LEVEL_ORDER: [&str; 3] = ["Lower Harm", "Medium Harm", "High Harm"];

/// Options of the "size by" selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeAttribute {
	/// Number of works cited.
	#[default]
	Cites,
	/// Number of external citations.
	CitedBy,
	/// Author's total works.
	AuthorTotalWorksCount,
	/// Publication year.
	YearPublished,
	/// Research method population scale.
	PopulationScale,
	/// Harm magnitude.
	HarmMagnitude,
	/// Harm population impact.
	HarmPopulationImpact,
}

impl SizeAttribute {
	/// Selector order.
	pub const ALL: [SizeAttribute; 7] = [
		SizeAttribute::Cites,
		SizeAttribute::CitedBy,
		SizeAttribute::AuthorTotalWorksCount,
		SizeAttribute::YearPublished,
		SizeAttribute::PopulationScale,
		SizeAttribute::HarmMagnitude,
		SizeAttribute::HarmPopulationImpact,
	];

	/// Column the radius is read from.
	pub fn column(self) -> Column {
		match self {
			Self::Cites => Column::Cites,
			Self::CitedBy => Column::CitedBy,
			Self::AuthorTotalWorksCount => Column::AuthorTotalWorksCount,
			Self::YearPublished => Column::YearPublished,
			Self::PopulationScale => Column::ResearchMethodPopulationScale,
			Self::HarmMagnitude => Column::HarmMagnitude,
			Self::HarmPopulationImpact => Column::HarmPopulationImpact,
		}
	}

	/// How raw values of the column turn into numbers.
	pub fn kind(self) -> ScaleKind {
		match self {
			Self::PopulationScale => ScaleKind::FixedOrdinal,
			Self::HarmMagnitude | Self::HarmPopulationImpact => ScaleKind::HarmLevel,
			_ => ScaleKind::Numeric,
		}
	}

	/// Text shown in the selector.
	pub fn label(self) -> &'static str {
		match self {
			Self::Cites => "Number of Works Cited",
			Self::CitedBy => "Number of External Citations",
			Self::AuthorTotalWorksCount => "Author Total Works Published",
			Self::YearPublished => "Year Published",
			Self::PopulationScale => "Research Method Population Size",
			Self::HarmMagnitude => "Harm Magnitude",
			Self::HarmPopulationImpact => "Harm Population Impact",
		}
	}

	/// Selector values are the column names.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|attribute| attribute.column().name() == name)
	}
}

/// Columns offered by the "secondary links" selector.
pub const SECONDARY_LINK_COLUMNS: [Column; 7] = [
	Column::SecondaryDeterminantAnalyzed1,
	Column::SecondaryDeterminantAnalyzed2,
	Column::SecondaryDeterminantAnalyzed3,
	Column::AlignedSdg,
	Column::ResearchType,
	Column::ResearchMethod,
	Column::ResearchLocations,
];

/// Detail panel fields describing the research itself, by display label.
pub const RESEARCH_FIELDS: [&str; 10] = [
	"Title",
	"Year Published",
	"Primary Author",
	"Number of Works Cited",
	"Number of External Citations",
	"Author Total Works Published",
	"Research Location",
	"Research Type",
	"Research Method",
	"Research Method Population Size",
];

/// Detail panel fields describing the category and harm, by display label.
pub const HARM_FIELDS: [&str; 8] = [
	"Social Determinant Category",
	"Primary Determinant Analyzed",
	"Secondary Determinant Analyzed 1",
	"Secondary Determinant Analyzed 2",
	"Secondary Determinant Analyzed 3",
	"Aligned SDG",
	"Harm Magnitude",
	"Harm Population Impact",
];

/// Maps a display label to the column holding its value.
pub fn column_for_label(label: &str) -> Option<Column> {
	match label {
		"Number of Works Cited" => Some(Column::Cites),
		"Number of External Citations" => Some(Column::CitedBy),
		"Author Total Works Published" => Some(Column::AuthorTotalWorksCount),
		"Research Location" => Some(Column::ResearchLocations),
		"Research Method Population Size" => Some(Column::ResearchMethodPopulationScale),
		other => Column::from_name(other),
	}
}
