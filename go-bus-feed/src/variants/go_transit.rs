//! Curated variant table for GO Transit bus routes.
//!
//! Members are headsigns as they come out of the normalizer. Branch
//! letters are part of the published headsign ("B Union") and are listed
//! explicitly. Groups of one route are tried in the order written here.

use crate::domain::RouteId;

use super::{VariantTable, VariantTableError};

/// Build the built-in GO Transit bus table.
pub fn go_transit() -> Result<VariantTable, VariantTableError> {
    let r = RouteId::new;
    VariantTable::builder()
        .group(
            r(12),
            "Burlington Carpool",
            &["A Burlington Carpool", "B Burlington", "Burlington Carpool", "C Burlington", "D Burlington"],
        )
        .group(r(12), "Niagara Falls", &["B Niagara Falls", "C St. Catharines", "Niagara Falls"])
        .group(r(15), "Aldershot", &["A Aldershot", "Aldershot"])
        .group(r(15), "Brantford", &["A McMaster U", "Brantford"])
        .group(
            r(18),
            "Union",
            &["Aldershot", "B Union", "G Union", "H Union", "Union", "Special"],
        )
        .group(
            r(18),
            "Hamilton",
            &["C Hamilton", "D Clarkson", "E West Harbour", "F Hamilton", "Hamilton", "Special"],
        )
        .group(r(19), "Finch", &["A Finch", "B York Mills", "C Finch", "Finch"])
        .group(r(19), "Sq One", &["A Sq One", "B Sq One", "C Sq One", "Sq One"])
        .group(
            r(21),
            "Union",
            &[
                "A Union", "B Union", "C Union", "D Union", "E Union", "F Cooksville", "G Union",
                "H Union", "J Union", "K Union", "L Union", "M Union", "N Union", "P Union",
                "R Union", "T Union", "Union",
            ],
        )
        .group(
            r(21),
            "Milton",
            &[
                "A Milton", "B Milton", "D Lisgar", "E Lisgar", "G Erindale", "F Sq One", "H Sq One",
                "J Sq One", "M Dixie", "N Milton", "P Meadowvale", "Milton",
            ],
        )
        .group(r(25), "Sq One", &["B Sq One", "C Sq One", "D Sq One", "F York U", "Sq One"])
        .group(
            r(25),
            "U Of Waterloo",
            &["C U Of Waterloo", "F U Of Waterloo", "U Of Waterloo"],
        )
        .group(r(27), "Finch", &["A Finch", "B York Mills", "C Finch", "F Finch", "Finch"])
        .group(r(27), "Milton", &["A Milton", "B Meadowvale", "C Milton", "F Meadowvale", "Milton"])
        .group(r(29), "Guelph Central", &["B U Of Guelph", "Guelph Central"])
        .group(
            r(31),
            "Union",
            &["A Union", "D Bramalea", "E Union", "F Union", "H Union", "J Union", "L Union", "Union"],
        )
        .group(
            r(31),
            "U Of Guelph",
            &[
                "A U Of Guelph", "E Georgetown", "F Georgetown", "H Brampton", "L Bramalea",
                "N Bramalea", "U Of Guelph",
            ],
        )
        .group(r(32), "York Mills", &["A York Mills", "B York Mills", "York Mills"])
        .group(r(32), "Trinity Common", &["A Bramalea", "B Bramalea", "Trinity Common"])
        .group(
            r(33),
            "York Mills",
            &["A York Mills", "C Georgetown", "D Brampton", "E York Mills", "Mt Pleasant", "York Mills"],
        )
        .group(
            r(33),
            "U Of Guelph",
            &[
                "A Brampton", "B Mt Pleasant", "C U Of Guelph", "D U Of Guelph", "E Georgetown",
                "F U Of Guelph", "G Georgetown", "U Of Guelph",
            ],
        )
        .group(r(35), "Weston", &["A Pearson Airport UP Express", "Weston"])
        .group(
            r(35),
            "Pearson Airport UP Express",
            &["A Pearson Airport UP Express", "Pearson Airport UP Express"],
        )
        .group(r(36), "York Mills", &["B York Mills", "York Mills"])
        .group(r(36), "Brampton", &["B Bramalea", "Brampton"])
        .group(r(38), "Bolton", &["A Bolton", "Bolton"])
        .group(r(38), "York Mills", &["A York Mills", "Malton", "York Mills"])
        .group(r(40), "Richmond Hl Ctr", &["A Sq One", "Richmond Hill Ctr"])
        .group(r(40), "Hamilton", &["A Hamilton", "Hamilton"])
        .group(r(45), "York U", &["A York U", "York U"])
        .group(r(45), "Streetsville", &["A Sq One", "Streetsville"])
        .group(r(46), "York U", &["A Sq One", "York U"])
        .group(r(46), "Oakville", &["A Sheridan College", "Oakville"])
        .group(
            r(47),
            "York U",
            &[
                "A Bramalea", "B Sq One", "C Erin Mills", "E Oakville Carpool", "F York U",
                "H Bronte Carpool", "York U",
            ],
        )
        .group(
            r(47),
            "Hamilton",
            &["B McMaster U", "C McMaster U", "F McMaster U", "H McMaster U", "Hamilton"],
        )
        .group(r(48), "York U", &["A York U", "B York U", "F York U", "York U"])
        .group(
            r(48),
            "U Of Guelph",
            &["A Meadowvale", "B Meadowvale", "F U Of Guelph", "U Of Guelph"],
        )
        .group(
            r(51),
            "Pickering",
            &["A Scarborough", "B Pickering", "C U Of T Scarboro", "D Centennial College", "Pickering"],
        )
        .group(r(51), "York U", &["A York U", "B York U", "C York U", "York U"])
        .group(r(52), "York U", &["B York U", "York U"])
        .group(r(52), "Oshawa", &["A UOIT / D.C.", "Oshawa"])
        .group(r(54), "York U", &["A York U", "B York U", "C York U", "York U"])
        .group(r(54), "Mt Joy", &["C Mt Joy", "Mt Joy"])
        .group(r(61), "Gormley", &["B Langstaff", "C Gormley", "E Gormley", "Gormley"])
        .group(r(61), "Union", &["A Union", "B Union", "C Union", "D Union", "Union"])
        .group(r(63), "King City", &["A King City", "King City"])
        .group(r(63), "Union", &["A Union", "Union"])
        .group(
            r(65),
            "East Gwillimbury",
            &["A Newmarket", "B East Gwillimbury", "C Aurora", "G East Gwillimbury", "East Gwillimbury"],
        )
        .group(
            r(65),
            "Union",
            &["B Union", "C Union", "D Union", "E Union", "F Union", "G Union", "Union"],
        )
        .group(r(66), "Newmarket", &["A Newmarket", "Newmarket"])
        .group(
            r(66),
            "East Gwillimbury",
            &["A East Gwillimbury", "A Newmarket", "East Gwillimbury", "Newmarket"],
        )
        .group(r(66), "Yorkdale", &["A Yorkdale", "Yorkdale"])
        .group(
            r(68),
            "Barrie",
            &["A Bradford", "B Barrie", "C Barrie", "D Allandale Waterfront", "Barrie"],
        )
        .group(
            r(68),
            "Newmarket",
            &["Aurora", "B East Gwillimbury", "C Aurora", "D Union", "Newmarket"],
        )
        .group(r(69), "Newmarket", &["A Aurora / 404", "Newmarket"])
        .group(r(69), "Aurora", &["A Aurora", "Aurora"])
        .group(r(70), "Uxbridge", &["B Uxbridge", "E Mt Joy", "Uxbridge"])
        .group(
            r(70),
            "Unionville",
            &["A Unionville", "B Lincolnville", "E Unionville", "Unionville"],
        )
        .group(
            r(71),
            "Uxbridge",
            &["A Uxbridge", "C Lincolnville", "D Lincolnville", "F Centennial", "G Unionville", "Uxbridge"],
        )
        .group(
            r(71),
            "Union",
            &["A Union", "C Union", "D Union", "E Union", "F Union", "G Union", "Union"],
        )
        .group(r(81), "Beaverton", &["A Port Perry", "Beaverton"])
        .group(r(81), "Whitby", &["A Whitby", "Whitby"])
        .group(
            r(90),
            "Newcastle",
            &[
                "A Bowmanville", "B Oshawa", "C Newcastle", "D Bowmanville P&R", "Y Ajax", "X Whitby",
                "W Oshawa", "Z Oshawa", "Ajax", "Oshawa", "Special", "Whitby", "Newcastle",
            ],
        )
        .group(
            r(90),
            "Union",
            &[
                "A Oshawa", "B Union", "Y Pickering", "X Pickering", "W Pickering", "Z Pickering",
                "Oshawa", "Pickering", "Special", "Union",
            ],
        )
        .group(r(92), "Oshawa", &["A Ajax", "A Dundas / Hwy 412 P&R", "Oshawa"])
        .group(r(92), "Yorkdale", &["A Finch", "A Dundas / Hwy 412 P&R", "Yorkdale"])
        .group(
            r(96),
            "Oshawa",
            &["A Oshawa", "B Oshawa", "C Ajax", "D Oshawa", "Special", "Oshawa"],
        )
        .group(
            r(96),
            "Finch",
            &["A Scarboro", "B Finch", "C Finch", "D Finch", "Special", "Finch"],
        )
        .build()
}
