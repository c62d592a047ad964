//! # Built-in Apportionment
//!
//! Electoral votes by jurisdiction following the 2020 census, in effect for
//! the 2024 and 2028 elections. Each row is
//! `(jurisdiction, electoral votes, congressional districts, region)`.
//! DC has no House seat; it is recorded as one district so that the
//! `votes == districts + 2` invariant holds uniformly.

use crate::contender::Contender;
use crate::jurisdiction::Jurisdiction::{self, *};
use crate::region::Region;

pub(crate) const APPORTIONMENT: &[(Jurisdiction, u32, u32, Region)] = &[
    // Northeast
    (Maine, 4, 2, Region::Northeast),
    (NewHampshire, 4, 2, Region::Northeast),
    (Vermont, 3, 1, Region::Northeast),
    (Massachusetts, 11, 9, Region::Northeast),
    (RhodeIsland, 4, 2, Region::Northeast),
    (Connecticut, 7, 5, Region::Northeast),
    (NewYork, 28, 26, Region::Northeast),
    (NewJersey, 14, 12, Region::Northeast),
    (Pennsylvania, 19, 17, Region::Northeast),

    // Midwest
    (Ohio, 17, 15, Region::Midwest),
    (Indiana, 11, 9, Region::Midwest),
    (Illinois, 19, 17, Region::Midwest),
    (Michigan, 15, 13, Region::Midwest),
    (Wisconsin, 10, 8, Region::Midwest),
    (Minnesota, 10, 8, Region::Midwest),
    (Iowa, 6, 4, Region::Midwest),
    (Missouri, 10, 8, Region::Midwest),
    (NorthDakota, 3, 1, Region::Midwest),
    (SouthDakota, 3, 1, Region::Midwest),
    (Nebraska, 5, 3, Region::Midwest),
    (Kansas, 6, 4, Region::Midwest),

    // South
    (Delaware, 3, 1, Region::South),
    (Maryland, 10, 8, Region::South),
    (Virginia, 13, 11, Region::South),
    (WestVirginia, 4, 2, Region::South),
    (NorthCarolina, 16, 14, Region::South),
    (SouthCarolina, 9, 7, Region::South),
    (Georgia, 16, 14, Region::South),
    (Florida, 30, 28, Region::South),
    (Kentucky, 8, 6, Region::South),
    (Tennessee, 11, 9, Region::South),
    (Alabama, 9, 7, Region::South),
    (Mississippi, 6, 4, Region::South),
    (Arkansas, 6, 4, Region::South),
    (Louisiana, 8, 6, Region::South),
    (Oklahoma, 7, 5, Region::South),
    (Texas, 40, 38, Region::South),

    // West
    (Montana, 4, 2, Region::West),
    (Idaho, 4, 2, Region::West),
    (Wyoming, 3, 1, Region::West),
    (Colorado, 10, 8, Region::West),
    (NewMexico, 5, 3, Region::West),
    (Arizona, 11, 9, Region::West),
    (Utah, 6, 4, Region::West),
    (Nevada, 6, 4, Region::West),
    (Washington, 12, 10, Region::West),
    (Oregon, 8, 6, Region::West),
    (California, 54, 52, Region::West),
    (Alaska, 3, 1, Region::West),
    (Hawaii, 4, 2, Region::West),

    // District
    (DistrictOfColumbia, 3, 1, Region::District),
];

/// Jurisdictions decided by narrow margins in recent cycles.
pub(crate) const SWING: &[Jurisdiction] = &[
    Arizona,
    Georgia,
    Michigan,
    Nevada,
    Pennsylvania,
    Wisconsin,
];

/// Jurisdictions with a long-standing partisan lean.
pub(crate) const HISTORICAL_LEANINGS: &[(Jurisdiction, Contender)] = &[
    (California, Contender::Democratic),
    (NewYork, Contender::Democratic),
    (Illinois, Contender::Democratic),
    (Massachusetts, Contender::Democratic),
    (Texas, Contender::Republican),
    (Wyoming, Contender::Republican),
    (Idaho, Contender::Republican),
    (Utah, Contender::Republican),
];
