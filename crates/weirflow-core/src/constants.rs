/// Fitted curves and empirical constants for composite V-notch weirs.
///
/// Ce curves are polynomial fits in H/P of Kulin & Compton (1975), Fig. 4-5,
/// one per nominal P/B. Coefficients are in ascending order of power.
use crate::polynomial::Polynomial;

// -- Ce curves of a partially-contracted V-notch, by nominal P/B --

/// Ce(H/P) at P/B = 0.1, degree 4.
pub const CE_PB_01: Polynomial = Polynomial::new(&[
    0.5775820332236,
    0.0074465337219,
    -0.0098778444155,
    -0.0022811100135,
    0.0040400722952,
]);

/// Ce(H/P) at P/B = 0.2, degree 8.
pub const CE_PB_02: Polynomial = Polynomial::new(&[
    0.5754430976103,
    0.0537761462335,
    -0.3915495246612,
    1.5750016012957,
    -3.5963305902167,
    4.6649758699716,
    -3.3601376637499,
    1.2367993513345,
    -0.1776021827636,
]);

/// Ce(H/P) at P/B = 0.3, degree 11.
pub const CE_PB_03: Polynomial = Polynomial::new(&[
    0.5927399876207,
    -0.5061745895971,
    7.2148793901404,
    -55.8169137604434,
    264.4084043205384,
    -811.1922174539758,
    1655.456934299524,
    -2263.169149753214,
    2045.95965628624,
    -1172.777992197495,
    385.9421994215697,
    -55.5246831179059,
]);

/// Ce(H/P) at P/B = 0.4, degree 11.
pub const CE_PB_04: Polynomial = Polynomial::new(&[
    0.608460034015,
    -1.0931938246613,
    16.4747600800621,
    -137.2078078095456,
    707.7160459825956,
    -2385.9814006935103,
    5392.87319867412,
    -8219.396721238372,
    8329.485298705671,
    -5376.586364087006,
    1999.9815196019158,
    -326.2748669937048,
]);

/// Ce(H/P) at P/B = 0.6, degree 6.
pub const CE_PB_06: Polynomial = Polynomial::new(&[
    0.5777004528603,
    -0.0118348270028,
    0.3240549526796,
    -2.1470998115822,
    6.1075340060361,
    -7.6054084567142,
    3.5509969570713,
]);

/// Ce(H/P) at P/B = 0.8, degree 8.
pub const CE_PB_08: Polynomial = Polynomial::new(&[
    0.5604543922725,
    0.7652761902615,
    -13.6548795540878,
    130.3406886569203,
    -722.6932711275226,
    2388.1739432881486,
    -4618.7836909284715,
    4822.136683514677,
    -2098.188266193364,
]);

/// Ce(H/P) at P/B = 1.0, degree 6.
pub const CE_PB_10: Polynomial = Polynomial::new(&[
    0.6181601989942,
    -1.2744715661067,
    15.9645346761014,
    -100.3409026491789,
    334.8942428178557,
    -564.6042445931643,
    380.3109110700038,
]);

// -- Head-ratio clamps --

/// Below this H/P every band returns `CE_LOW_CLAMP`.
pub const HP_MIN: f64 = 0.1;

/// Ce used for H/P below `HP_MIN`.
pub const CE_LOW_CLAMP: f64 = 0.58;

// -- Head correction --

/// kh(angle) in degrees, Kulin & Compton (1975), Fig. 4-3.
pub const KH_VNOTCH: Polynomial = Polynomial::new(&[
    0.0174729907833,
    -0.0005756285132,
    0.0000097540537,
    -0.0000000830929,
    0.0000000002853,
]);

// -- Discharge equations --

/// Kindsvater-Shen coefficient: (8/15)·sqrt(2g) in feet-second units.
pub const KS_COEFFICIENT: f64 = 4.28;

/// Simplified Ce(H) fitted to site data, used by the Phil composite.
pub const CE_SIMPLIFIED: Polynomial = Polynomial::new(&[0.5761, 0.01, -0.021, 0.0142]);

/// Fixed head correction of the Phil composite [ft].
pub const PHIL_HEAD_CORRECTION: f64 = 0.0029;

/// Coefficient `a` of the HY-8 culvert fit Q = a·(hm + offset)^b.
pub const HY8_COEFFICIENT: f64 = 7.8791;

/// Exponent `b` of the HY-8 culvert fit.
pub const HY8_EXPONENT: f64 = 1.6098;

/// Depth from the V-notch crest down to the culvert invert: 4 in [ft].
pub const HY8_HEAD_OFFSET: f64 = 4.0 / 12.0;

/// HY-8 discharge at the top of the V-notch [cfs].
pub const HY8_TOP_OF_NOTCH: f64 = 20.55;

/// Exponent of the Bergmann V-notch term.
pub const BERGMANN_EXPONENT: f64 = 1.72;
