//! Built-in reference tables.
//!
//! Federal figures are the 2023 single-filer schedule and the 2023 payroll
//! limits. Category shares follow the 2023 federal budget and an average
//! state/local budget. Jurisdictions are listed in selector order.

use rust_decimal_macros::dec;

use crate::models::{
    CategoryWeight, CountyProfile, JurisdictionProfile, PayrollTaxConfig, ProgramDetail,
    TaxBracket,
};

/// Jurisdiction used when no selection has been made.
pub const DEFAULT_JURISDICTION: &str = "CA";

/// Fraction of annual income assumed to be spent inside the county.
pub const LOCAL_SPENDING_SHARE: rust_decimal::Decimal = dec!(0.10);

pub fn federal_brackets() -> Vec<TaxBracket> {
    let rows = [
        (dec!(0), Some(dec!(11000)), dec!(0.10), dec!(0)),
        (dec!(11000), Some(dec!(44725)), dec!(0.12), dec!(1100)),
        (dec!(44725), Some(dec!(95375)), dec!(0.22), dec!(5147)),
        (dec!(95375), Some(dec!(182050)), dec!(0.24), dec!(16290)),
        (dec!(182050), Some(dec!(231250)), dec!(0.32), dec!(37104)),
        (dec!(231250), Some(dec!(578125)), dec!(0.35), dec!(52832)),
        (dec!(578125), None, dec!(0.37), dec!(174238.25)),
    ];

    rows.into_iter()
        .map(|(min_income, max_income, tax_rate, base_tax)| TaxBracket {
            min_income,
            max_income,
            tax_rate,
            base_tax,
        })
        .collect()
}

pub fn payroll_config() -> PayrollTaxConfig {
    PayrollTaxConfig {
        ss_wage_base: dec!(160200),
        ss_tax_rate: dec!(0.062),
        medicare_tax_rate: dec!(0.0145),
        additional_medicare_threshold: dec!(200000),
        additional_medicare_rate: dec!(0.009),
    }
}

pub fn federal_weights() -> Vec<CategoryWeight> {
    vec![
        CategoryWeight::new("Defense & Military", dec!(0.13), "bg-blue-500"),
        CategoryWeight::new("Social Security", dec!(0.21), "bg-purple-500"),
        CategoryWeight::new("Medicare", dec!(0.15), "bg-green-500"),
        CategoryWeight::new("Medicaid & CHIP", dec!(0.10), "bg-emerald-500"),
        CategoryWeight::new("Interest on National Debt", dec!(0.10), "bg-red-500"),
        CategoryWeight::new("Veterans Benefits & Services", dec!(0.04), "bg-orange-500"),
        CategoryWeight::new("Education & Training", dec!(0.03), "bg-indigo-500"),
        CategoryWeight::new("Transportation & Infrastructure", dec!(0.02), "bg-amber-500"),
        CategoryWeight::new("Unemployment Insurance", dec!(0.02), "bg-teal-500"),
        CategoryWeight::new("Agriculture & Food Assistance", dec!(0.02), "bg-lime-500"),
        CategoryWeight::new("Justice & Law Enforcement", dec!(0.02), "bg-slate-500"),
        CategoryWeight::new("Science & Space Programs", dec!(0.02), "bg-cyan-500"),
        CategoryWeight::new("Energy & Environment", dec!(0.01), "bg-green-600"),
        CategoryWeight::new("Housing Assistance", dec!(0.01), "bg-pink-500"),
        CategoryWeight::new("International Affairs", dec!(0.01), "bg-violet-500"),
        CategoryWeight::new("Other Federal Programs", dec!(0.11), "bg-gray-500"),
    ]
}

pub fn state_local_weights() -> Vec<CategoryWeight> {
    vec![
        CategoryWeight::new("Public Education (K-12)", dec!(0.35), "bg-blue-500"),
        CategoryWeight::new("Higher Education & Universities", dec!(0.12), "bg-indigo-500"),
        CategoryWeight::new("Healthcare & Social Services", dec!(0.15), "bg-green-500"),
        CategoryWeight::new("Transportation & Roads", dec!(0.08), "bg-amber-500"),
        CategoryWeight::new("Public Safety & Police", dec!(0.07), "bg-red-500"),
        CategoryWeight::new("Corrections & Prisons", dec!(0.05), "bg-orange-500"),
        CategoryWeight::new("Parks & Recreation", dec!(0.03), "bg-green-600"),
        CategoryWeight::new("Environmental Protection", dec!(0.02), "bg-emerald-500"),
        CategoryWeight::new("Libraries & Cultural Programs", dec!(0.02), "bg-purple-500"),
        CategoryWeight::new("Housing & Community Development", dec!(0.02), "bg-pink-500"),
        CategoryWeight::new("Public Utilities & Services", dec!(0.02), "bg-cyan-500"),
        CategoryWeight::new("Government Administration", dec!(0.03), "bg-slate-500"),
        CategoryWeight::new("Other State & Local Services", dec!(0.04), "bg-gray-500"),
    ]
}

pub fn jurisdictions() -> Vec<JurisdictionProfile> {
    let rows = [
        ("AL", "Alabama", dec!(0.05), dec!(0.04), dec!(0.0041)),
        ("AK", "Alaska", dec!(0.0), dec!(0.0), dec!(0.0089)),
        ("AZ", "Arizona", dec!(0.025), dec!(0.056), dec!(0.0066)),
        ("AR", "Arkansas", dec!(0.055), dec!(0.065), dec!(0.0062)),
        ("CA", "California", dec!(0.093), dec!(0.0875), dec!(0.0075)),
        ("CO", "Colorado", dec!(0.0463), dec!(0.029), dec!(0.0051)),
        ("CT", "Connecticut", dec!(0.07), dec!(0.0635), dec!(0.021)),
        ("DE", "Delaware", dec!(0.066), dec!(0.0), dec!(0.0057)),
        ("DC", "Washington D.C.", dec!(0.0975), dec!(0.06), dec!(0.0085)),
        ("FL", "Florida", dec!(0.0), dec!(0.07), dec!(0.009)),
        ("GA", "Georgia", dec!(0.0575), dec!(0.04), dec!(0.0092)),
        ("HI", "Hawaii", dec!(0.08), dec!(0.04), dec!(0.0031)),
        ("ID", "Idaho", dec!(0.058), dec!(0.06), dec!(0.0069)),
        ("IL", "Illinois", dec!(0.0495), dec!(0.0825), dec!(0.021)),
        ("IN", "Indiana", dec!(0.032), dec!(0.07), dec!(0.0085)),
        ("IA", "Iowa", dec!(0.0385), dec!(0.06), dec!(0.0154)),
        ("KS", "Kansas", dec!(0.031), dec!(0.065), dec!(0.0141)),
        ("KY", "Kentucky", dec!(0.05), dec!(0.06), dec!(0.0086)),
        ("LA", "Louisiana", dec!(0.0425), dec!(0.0545), dec!(0.0056)),
        ("ME", "Maine", dec!(0.075), dec!(0.055), dec!(0.0133)),
        ("MD", "Maryland", dec!(0.0575), dec!(0.06), dec!(0.0111)),
        ("MA", "Massachusetts", dec!(0.05), dec!(0.0625), dec!(0.0124)),
        ("MI", "Michigan", dec!(0.0425), dec!(0.06), dec!(0.0144)),
        ("MN", "Minnesota", dec!(0.0985), dec!(0.0688), dec!(0.0114)),
        ("MS", "Mississippi", dec!(0.05), dec!(0.07), dec!(0.0061)),
        ("MO", "Missouri", dec!(0.054), dec!(0.0423), dec!(0.0097)),
        ("MT", "Montana", dec!(0.0675), dec!(0.0), dec!(0.0084)),
        ("NE", "Nebraska", dec!(0.0684), dec!(0.055), dec!(0.0176)),
        ("NV", "Nevada", dec!(0.0), dec!(0.0685), dec!(0.0084)),
        ("NH", "New Hampshire", dec!(0.0), dec!(0.0), dec!(0.0186)),
        ("NJ", "New Jersey", dec!(0.1075), dec!(0.0663), dec!(0.0249)),
        ("NM", "New Mexico", dec!(0.059), dec!(0.0513), dec!(0.0076)),
        ("NY", "New York", dec!(0.103), dec!(0.08), dec!(0.016)),
        ("NC", "North Carolina", dec!(0.0475), dec!(0.0475), dec!(0.0084)),
        ("ND", "North Dakota", dec!(0.0295), dec!(0.05), dec!(0.0098)),
        ("OH", "Ohio", dec!(0.0399), dec!(0.0725), dec!(0.0157)),
        ("OK", "Oklahoma", dec!(0.05), dec!(0.045), dec!(0.009)),
        ("OR", "Oregon", dec!(0.099), dec!(0.0), dec!(0.0087)),
        ("PA", "Pennsylvania", dec!(0.0307), dec!(0.06), dec!(0.015)),
        ("RI", "Rhode Island", dec!(0.0599), dec!(0.07), dec!(0.0146)),
        ("SC", "South Carolina", dec!(0.07), dec!(0.06), dec!(0.0057)),
        ("SD", "South Dakota", dec!(0.0), dec!(0.045), dec!(0.0128)),
        ("TN", "Tennessee", dec!(0.0), dec!(0.07), dec!(0.0066)),
        ("TX", "Texas", dec!(0.0), dec!(0.0825), dec!(0.0181)),
        ("UT", "Utah", dec!(0.0495), dec!(0.061), dec!(0.0066)),
        ("VT", "Vermont", dec!(0.086), dec!(0.06), dec!(0.0189)),
        ("VA", "Virginia", dec!(0.0575), dec!(0.043), dec!(0.0081)),
        ("WA", "Washington", dec!(0.0), dec!(0.065), dec!(0.0092)),
        ("WV", "West Virginia", dec!(0.065), dec!(0.06), dec!(0.0059)),
        ("WI", "Wisconsin", dec!(0.0765), dec!(0.05), dec!(0.0194)),
        ("WY", "Wyoming", dec!(0.0), dec!(0.04), dec!(0.0062)),
    ];

    rows.into_iter()
        .map(|(code, name, income, sales, property)| {
            JurisdictionProfile::new(code, name, income, sales, property)
        })
        .collect()
}

/// County tables, keyed by jurisdiction code. Only a handful of
/// metropolitan areas are covered.
pub fn counties() -> Vec<(String, Vec<CountyProfile>)> {
    vec![
        (
            "CA".to_string(),
            vec![
                CountyProfile::new(
                    "Los Angeles County",
                    dec!(0.0075),
                    dec!(0.0025),
                    &["Metro Transit", "County Parks", "Library System", "Public Health"],
                ),
                CountyProfile::new(
                    "Orange County",
                    dec!(0.0073),
                    dec!(0.0075),
                    &["Transportation Authority", "Beaches & Parks", "Fire Authority", "Public Libraries"],
                ),
                CountyProfile::new(
                    "San Francisco County",
                    dec!(0.0112),
                    dec!(0.0025),
                    &["MUNI Transit", "City Parks", "Public Health", "Affordable Housing"],
                ),
                CountyProfile::new(
                    "San Diego County",
                    dec!(0.0068),
                    dec!(0.0075),
                    &["SANDAG Transit", "County Parks", "Library System", "Health Services"],
                ),
            ],
        ),
        (
            "NY".to_string(),
            vec![
                CountyProfile::new(
                    "New York County (Manhattan)",
                    dec!(0.0128),
                    dec!(0.045),
                    &["MTA Subway", "Central Park", "Public Schools", "FDNY/NYPD"],
                ),
                CountyProfile::new(
                    "Kings County (Brooklyn)",
                    dec!(0.0067),
                    dec!(0.045),
                    &["MTA Transit", "Brooklyn Parks", "Public Libraries", "Sanitation"],
                ),
                CountyProfile::new(
                    "Queens County",
                    dec!(0.0068),
                    dec!(0.045),
                    &["MTA Service", "Flushing Meadows Park", "Public Schools", "Fire Department"],
                ),
                CountyProfile::new(
                    "Nassau County",
                    dec!(0.021),
                    dec!(0.045),
                    &["NICE Bus", "County Parks", "Police Department", "Public Works"],
                ),
            ],
        ),
        (
            "TX".to_string(),
            vec![
                CountyProfile::new(
                    "Harris County (Houston)",
                    dec!(0.0208),
                    dec!(0.02),
                    &["Metro Transit", "Harris County Parks", "Flood Control", "Public Health"],
                ),
                CountyProfile::new(
                    "Dallas County",
                    dec!(0.0197),
                    dec!(0.02),
                    &["DART Transit", "White Rock Lake", "Parkland Hospital", "Community Colleges"],
                ),
                CountyProfile::new(
                    "Travis County (Austin)",
                    dec!(0.0184),
                    dec!(0.02),
                    &["Capital Metro", "County Parks", "Healthcare District", "EMS Services"],
                ),
                CountyProfile::new(
                    "Bexar County (San Antonio)",
                    dec!(0.0156),
                    dec!(0.0125),
                    &["VIA Transit", "San Antonio River", "University Health", "Public Libraries"],
                ),
            ],
        ),
        (
            "FL".to_string(),
            vec![
                CountyProfile::new(
                    "Miami-Dade County",
                    dec!(0.0097),
                    dec!(0.01),
                    &["Metrobus/Metrorail", "Miami Beach", "Jackson Health", "Public Schools"],
                ),
                CountyProfile::new(
                    "Broward County",
                    dec!(0.0108),
                    dec!(0.01),
                    &["Broward County Transit", "Parks & Recreation", "Fire Rescue", "Libraries"],
                ),
                CountyProfile::new(
                    "Orange County (Orlando)",
                    dec!(0.0089),
                    dec!(0.005),
                    &["Lynx Transit", "Orange County Parks", "Fire Rescue", "Convention Center"],
                ),
                CountyProfile::new(
                    "Hillsborough County (Tampa)",
                    dec!(0.0098),
                    dec!(0.01),
                    &["HART Transit", "Hillsborough River", "Fire Rescue", "Public Health"],
                ),
            ],
        ),
    ]
}

pub fn program_details() -> Vec<ProgramDetail> {
    vec![
        ProgramDetail::new(
            "Defense & Military",
            &[
                ("Active Military Personnel", 35),
                ("Military Operations & Maintenance", 30),
                ("Military Construction & Procurement", 25),
                ("Military Family Housing & Benefits", 10),
            ],
        ),
        ProgramDetail::new(
            "Social Security",
            &[
                ("Retirement Benefits", 75),
                ("Disability Insurance", 20),
                ("Survivor Benefits", 5),
            ],
        ),
        ProgramDetail::new(
            "Medicare",
            &[
                ("Hospital Insurance (Part A)", 50),
                ("Medical Insurance (Part B)", 30),
                ("Medicare Advantage (Part C)", 15),
                ("Prescription Drug Coverage (Part D)", 5),
            ],
        ),
        ProgramDetail::new(
            "Public Education (K-12)",
            &[
                ("Teacher Salaries & Benefits", 60),
                ("School Facilities & Maintenance", 20),
                ("Educational Materials & Technology", 10),
                ("Special Programs & Support Services", 10),
            ],
        ),
        ProgramDetail::new(
            "Higher Education & Universities",
            &[
                ("Faculty Salaries & Research", 50),
                ("Campus Operations & Maintenance", 25),
                ("Student Financial Aid", 15),
                ("Capital Projects", 10),
            ],
        ),
        ProgramDetail::new(
            "Healthcare & Social Services",
            &[
                ("Public Health Programs", 40),
                ("Mental Health Services", 25),
                ("Social Services", 20),
                ("Emergency Medical Services", 15),
            ],
        ),
        ProgramDetail::new(
            "Transportation & Roads",
            &[
                ("Highway Maintenance & Repair", 45),
                ("New Road Construction", 30),
                ("Public Transit Systems", 15),
                ("Traffic Management & Safety", 10),
            ],
        ),
        ProgramDetail::new(
            "Public Safety & Police",
            &[
                ("Police Officer Salaries", 70),
                ("Equipment & Vehicles", 15),
                ("Training & Professional Development", 10),
                ("Community Policing Programs", 5),
            ],
        ),
    ]
}
