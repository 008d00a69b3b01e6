// Generated by ftui-width-gen from the Unicode Character Database.
// Do not edit by hand; rerun the generator instead.

use crate::table::Interval;

/// Unicode version the tables were generated from.
pub const UNICODE_VERSION: (u8, u8, u8) = (14, 0, 0);

/// Codepoints at or above U+00A0 whose width is 0 or 2. Gaps are width 1.
pub static BASE_TABLE: &[Interval] = &[
    Interval::new(0x0300, 0x036F, 0),
    Interval::new(0x0483, 0x0489, 0),
    Interval::new(0x0591, 0x05BD, 0),
    Interval::new(0x05BF, 0x05BF, 0),
    Interval::new(0x05C1, 0x05C2, 0),
    Interval::new(0x05C4, 0x05C5, 0),
    Interval::new(0x05C7, 0x05C7, 0),
    Interval::new(0x0600, 0x0605, 0),
    Interval::new(0x0610, 0x061A, 0),
    Interval::new(0x061C, 0x061C, 0),
    Interval::new(0x064B, 0x065F, 0),
    Interval::new(0x0670, 0x0670, 0),
    Interval::new(0x06D6, 0x06DD, 0),
    Interval::new(0x06DF, 0x06E4, 0),
    Interval::new(0x06E7, 0x06E8, 0),
    Interval::new(0x06EA, 0x06ED, 0),
    Interval::new(0x070F, 0x070F, 0),
    Interval::new(0x0711, 0x0711, 0),
    Interval::new(0x0730, 0x074A, 0),
    Interval::new(0x07A6, 0x07B0, 0),
    Interval::new(0x07EB, 0x07F3, 0),
    Interval::new(0x07FD, 0x07FD, 0),
    Interval::new(0x0816, 0x0819, 0),
    Interval::new(0x081B, 0x0823, 0),
    Interval::new(0x0825, 0x0827, 0),
    Interval::new(0x0829, 0x082D, 0),
    Interval::new(0x0859, 0x085B, 0),
    Interval::new(0x0890, 0x0891, 0),
    Interval::new(0x0898, 0x089F, 0),
    Interval::new(0x08CA, 0x0902, 0),
    Interval::new(0x093A, 0x093A, 0),
    Interval::new(0x093C, 0x093C, 0),
    Interval::new(0x0941, 0x0948, 0),
    Interval::new(0x094D, 0x094D, 0),
    Interval::new(0x0951, 0x0957, 0),
    Interval::new(0x0962, 0x0963, 0),
    Interval::new(0x0981, 0x0981, 0),
    Interval::new(0x09BC, 0x09BC, 0),
    Interval::new(0x09C1, 0x09C4, 0),
    Interval::new(0x09CD, 0x09CD, 0),
    Interval::new(0x09E2, 0x09E3, 0),
    Interval::new(0x09FE, 0x09FE, 0),
    Interval::new(0x0A01, 0x0A02, 0),
    Interval::new(0x0A3C, 0x0A3C, 0),
    Interval::new(0x0A41, 0x0A42, 0),
    Interval::new(0x0A47, 0x0A48, 0),
    Interval::new(0x0A4B, 0x0A4D, 0),
    Interval::new(0x0A51, 0x0A51, 0),
    Interval::new(0x0A70, 0x0A71, 0),
    Interval::new(0x0A75, 0x0A75, 0),
    Interval::new(0x0A81, 0x0A82, 0),
    Interval::new(0x0ABC, 0x0ABC, 0),
    Interval::new(0x0AC1, 0x0AC5, 0),
    Interval::new(0x0AC7, 0x0AC8, 0),
    Interval::new(0x0ACD, 0x0ACD, 0),
    Interval::new(0x0AE2, 0x0AE3, 0),
    Interval::new(0x0AFA, 0x0AFF, 0),
    Interval::new(0x0B01, 0x0B01, 0),
    Interval::new(0x0B3C, 0x0B3C, 0),
    Interval::new(0x0B3F, 0x0B3F, 0),
    Interval::new(0x0B41, 0x0B44, 0),
    Interval::new(0x0B4D, 0x0B4D, 0),
    Interval::new(0x0B55, 0x0B56, 0),
    Interval::new(0x0B62, 0x0B63, 0),
    Interval::new(0x0B82, 0x0B82, 0),
    Interval::new(0x0BC0, 0x0BC0, 0),
    Interval::new(0x0BCD, 0x0BCD, 0),
    Interval::new(0x0C00, 0x0C00, 0),
    Interval::new(0x0C04, 0x0C04, 0),
    Interval::new(0x0C3C, 0x0C3C, 0),
    Interval::new(0x0C3E, 0x0C40, 0),
    Interval::new(0x0C46, 0x0C48, 0),
    Interval::new(0x0C4A, 0x0C4D, 0),
    Interval::new(0x0C55, 0x0C56, 0),
    Interval::new(0x0C62, 0x0C63, 0),
    Interval::new(0x0C81, 0x0C81, 0),
    Interval::new(0x0CBC, 0x0CBC, 0),
    Interval::new(0x0CBF, 0x0CBF, 0),
    Interval::new(0x0CC6, 0x0CC6, 0),
    Interval::new(0x0CCC, 0x0CCD, 0),
    Interval::new(0x0CE2, 0x0CE3, 0),
    Interval::new(0x0D00, 0x0D01, 0),
    Interval::new(0x0D3B, 0x0D3C, 0),
    Interval::new(0x0D41, 0x0D44, 0),
    Interval::new(0x0D4D, 0x0D4D, 0),
    Interval::new(0x0D62, 0x0D63, 0),
    Interval::new(0x0D81, 0x0D81, 0),
    Interval::new(0x0DCA, 0x0DCA, 0),
    Interval::new(0x0DD2, 0x0DD4, 0),
    Interval::new(0x0DD6, 0x0DD6, 0),
    Interval::new(0x0E31, 0x0E31, 0),
    Interval::new(0x0E34, 0x0E3A, 0),
    Interval::new(0x0E47, 0x0E4E, 0),
    Interval::new(0x0EB1, 0x0EB1, 0),
    Interval::new(0x0EB4, 0x0EBC, 0),
    Interval::new(0x0EC8, 0x0ECD, 0),
    Interval::new(0x0F18, 0x0F19, 0),
    Interval::new(0x0F35, 0x0F35, 0),
    Interval::new(0x0F37, 0x0F37, 0),
    Interval::new(0x0F39, 0x0F39, 0),
    Interval::new(0x0F71, 0x0F7E, 0),
    Interval::new(0x0F80, 0x0F84, 0),
    Interval::new(0x0F86, 0x0F87, 0),
    Interval::new(0x0F8D, 0x0F97, 0),
    Interval::new(0x0F99, 0x0FBC, 0),
    Interval::new(0x0FC6, 0x0FC6, 0),
    Interval::new(0x102D, 0x1030, 0),
    Interval::new(0x1032, 0x1037, 0),
    Interval::new(0x1039, 0x103A, 0),
    Interval::new(0x103D, 0x103E, 0),
    Interval::new(0x1058, 0x1059, 0),
    Interval::new(0x105E, 0x1060, 0),
    Interval::new(0x1071, 0x1074, 0),
    Interval::new(0x1082, 0x1082, 0),
    Interval::new(0x1085, 0x1086, 0),
    Interval::new(0x108D, 0x108D, 0),
    Interval::new(0x109D, 0x109D, 0),
    Interval::new(0x1100, 0x115F, 2),
    Interval::new(0x1160, 0x11FF, 0),
    Interval::new(0x135D, 0x135F, 0),
    Interval::new(0x1712, 0x1714, 0),
    Interval::new(0x1732, 0x1733, 0),
    Interval::new(0x1752, 0x1753, 0),
    Interval::new(0x1772, 0x1773, 0),
    Interval::new(0x17B4, 0x17B5, 0),
    Interval::new(0x17B7, 0x17BD, 0),
    Interval::new(0x17C6, 0x17C6, 0),
    Interval::new(0x17C9, 0x17D3, 0),
    Interval::new(0x17DD, 0x17DD, 0),
    Interval::new(0x180B, 0x180F, 0),
    Interval::new(0x1885, 0x1886, 0),
    Interval::new(0x18A9, 0x18A9, 0),
    Interval::new(0x1920, 0x1922, 0),
    Interval::new(0x1927, 0x1928, 0),
    Interval::new(0x1932, 0x1932, 0),
    Interval::new(0x1939, 0x193B, 0),
    Interval::new(0x1A17, 0x1A18, 0),
    Interval::new(0x1A1B, 0x1A1B, 0),
    Interval::new(0x1A56, 0x1A56, 0),
    Interval::new(0x1A58, 0x1A5E, 0),
    Interval::new(0x1A60, 0x1A60, 0),
    Interval::new(0x1A62, 0x1A62, 0),
    Interval::new(0x1A65, 0x1A6C, 0),
    Interval::new(0x1A73, 0x1A7C, 0),
    Interval::new(0x1A7F, 0x1A7F, 0),
    Interval::new(0x1AB0, 0x1ACE, 0),
    Interval::new(0x1B00, 0x1B03, 0),
    Interval::new(0x1B34, 0x1B34, 0),
    Interval::new(0x1B36, 0x1B3A, 0),
    Interval::new(0x1B3C, 0x1B3C, 0),
    Interval::new(0x1B42, 0x1B42, 0),
    Interval::new(0x1B6B, 0x1B73, 0),
    Interval::new(0x1B80, 0x1B81, 0),
    Interval::new(0x1BA2, 0x1BA5, 0),
    Interval::new(0x1BA8, 0x1BA9, 0),
    Interval::new(0x1BAB, 0x1BAD, 0),
    Interval::new(0x1BE6, 0x1BE6, 0),
    Interval::new(0x1BE8, 0x1BE9, 0),
    Interval::new(0x1BED, 0x1BED, 0),
    Interval::new(0x1BEF, 0x1BF1, 0),
    Interval::new(0x1C2C, 0x1C33, 0),
    Interval::new(0x1C36, 0x1C37, 0),
    Interval::new(0x1CD0, 0x1CD2, 0),
    Interval::new(0x1CD4, 0x1CE0, 0),
    Interval::new(0x1CE2, 0x1CE8, 0),
    Interval::new(0x1CED, 0x1CED, 0),
    Interval::new(0x1CF4, 0x1CF4, 0),
    Interval::new(0x1CF8, 0x1CF9, 0),
    Interval::new(0x1DC0, 0x1DFF, 0),
    Interval::new(0x200B, 0x200F, 0),
    Interval::new(0x2028, 0x202E, 0),
    Interval::new(0x2060, 0x2064, 0),
    Interval::new(0x2066, 0x206F, 0),
    Interval::new(0x20D0, 0x20F0, 0),
    Interval::new(0x231A, 0x231B, 2),
    Interval::new(0x2329, 0x232A, 2),
    Interval::new(0x23E9, 0x23EC, 2),
    Interval::new(0x23F0, 0x23F0, 2),
    Interval::new(0x23F3, 0x23F3, 2),
    Interval::new(0x2460, 0x24FF, 2),
    Interval::new(0x25FD, 0x25FE, 2),
    Interval::new(0x2614, 0x2615, 2),
    Interval::new(0x2648, 0x2653, 2),
    Interval::new(0x267F, 0x267F, 2),
    Interval::new(0x2693, 0x2693, 2),
    Interval::new(0x26A1, 0x26A1, 2),
    Interval::new(0x26AA, 0x26AB, 2),
    Interval::new(0x26BD, 0x26BE, 2),
    Interval::new(0x26C4, 0x26C5, 2),
    Interval::new(0x26CE, 0x26CE, 2),
    Interval::new(0x26D4, 0x26D4, 2),
    Interval::new(0x26EA, 0x26EA, 2),
    Interval::new(0x26F2, 0x26F3, 2),
    Interval::new(0x26F5, 0x26F5, 2),
    Interval::new(0x26FA, 0x26FA, 2),
    Interval::new(0x26FD, 0x26FD, 2),
    Interval::new(0x2705, 0x2705, 2),
    Interval::new(0x270A, 0x270B, 2),
    Interval::new(0x2728, 0x2728, 2),
    Interval::new(0x274C, 0x274C, 2),
    Interval::new(0x274E, 0x274E, 2),
    Interval::new(0x2753, 0x2755, 2),
    Interval::new(0x2757, 0x2757, 2),
    Interval::new(0x2795, 0x2797, 2),
    Interval::new(0x27B0, 0x27B0, 2),
    Interval::new(0x27BF, 0x27BF, 2),
    Interval::new(0x2B1B, 0x2B1C, 2),
    Interval::new(0x2B50, 0x2B50, 2),
    Interval::new(0x2B55, 0x2B55, 2),
    Interval::new(0x2CEF, 0x2CF1, 0),
    Interval::new(0x2D7F, 0x2D7F, 0),
    Interval::new(0x2DE0, 0x2DFF, 0),
    Interval::new(0x2E80, 0x2E99, 2),
    Interval::new(0x2E9B, 0x2EF3, 2),
    Interval::new(0x2F00, 0x2FD5, 2),
    Interval::new(0x2FF0, 0x2FFB, 2),
    Interval::new(0x3000, 0x3029, 2),
    Interval::new(0x302A, 0x302D, 0),
    Interval::new(0x302E, 0x303E, 2),
    Interval::new(0x3041, 0x3096, 2),
    Interval::new(0x3099, 0x309A, 0),
    Interval::new(0x309B, 0x30FF, 2),
    Interval::new(0x3105, 0x312F, 2),
    Interval::new(0x3131, 0x318E, 2),
    Interval::new(0x3190, 0x31E3, 2),
    Interval::new(0x31F0, 0x321E, 2),
    Interval::new(0x3220, 0x3247, 2),
    Interval::new(0x3250, 0x4DBF, 2),
    Interval::new(0x4E00, 0xA48C, 2),
    Interval::new(0xA490, 0xA4C6, 2),
    Interval::new(0xA66F, 0xA672, 0),
    Interval::new(0xA674, 0xA67D, 0),
    Interval::new(0xA69E, 0xA69F, 0),
    Interval::new(0xA6F0, 0xA6F1, 0),
    Interval::new(0xA802, 0xA802, 0),
    Interval::new(0xA806, 0xA806, 0),
    Interval::new(0xA80B, 0xA80B, 0),
    Interval::new(0xA825, 0xA826, 0),
    Interval::new(0xA82C, 0xA82C, 0),
    Interval::new(0xA8C4, 0xA8C5, 0),
    Interval::new(0xA8E0, 0xA8F1, 0),
    Interval::new(0xA8FF, 0xA8FF, 0),
    Interval::new(0xA926, 0xA92D, 0),
    Interval::new(0xA947, 0xA951, 0),
    Interval::new(0xA960, 0xA97C, 2),
    Interval::new(0xA980, 0xA982, 0),
    Interval::new(0xA9B3, 0xA9B3, 0),
    Interval::new(0xA9B6, 0xA9B9, 0),
    Interval::new(0xA9BC, 0xA9BD, 0),
    Interval::new(0xA9E5, 0xA9E5, 0),
    Interval::new(0xAA29, 0xAA2E, 0),
    Interval::new(0xAA31, 0xAA32, 0),
    Interval::new(0xAA35, 0xAA36, 0),
    Interval::new(0xAA43, 0xAA43, 0),
    Interval::new(0xAA4C, 0xAA4C, 0),
    Interval::new(0xAA7C, 0xAA7C, 0),
    Interval::new(0xAAB0, 0xAAB0, 0),
    Interval::new(0xAAB2, 0xAAB4, 0),
    Interval::new(0xAAB7, 0xAAB8, 0),
    Interval::new(0xAABE, 0xAABF, 0),
    Interval::new(0xAAC1, 0xAAC1, 0),
    Interval::new(0xAAEC, 0xAAED, 0),
    Interval::new(0xAAF6, 0xAAF6, 0),
    Interval::new(0xABE5, 0xABE5, 0),
    Interval::new(0xABE8, 0xABE8, 0),
    Interval::new(0xABED, 0xABED, 0),
    Interval::new(0xAC00, 0xD7A3, 2),
    Interval::new(0xD800, 0xDFFF, 0),
    Interval::new(0xF900, 0xFAFF, 2),
    Interval::new(0xFB1E, 0xFB1E, 0),
    Interval::new(0xFE00, 0xFE0F, 0),
    Interval::new(0xFE10, 0xFE19, 2),
    Interval::new(0xFE20, 0xFE2F, 0),
    Interval::new(0xFE30, 0xFE52, 2),
    Interval::new(0xFE54, 0xFE66, 2),
    Interval::new(0xFE68, 0xFE6B, 2),
    Interval::new(0xFEFF, 0xFEFF, 0),
    Interval::new(0xFF01, 0xFF60, 2),
    Interval::new(0xFFE0, 0xFFE6, 2),
    Interval::new(0xFFF9, 0xFFFB, 0),
    Interval::new(0x101FD, 0x101FD, 0),
    Interval::new(0x102E0, 0x102E0, 0),
    Interval::new(0x10376, 0x1037A, 0),
    Interval::new(0x10A01, 0x10A03, 0),
    Interval::new(0x10A05, 0x10A06, 0),
    Interval::new(0x10A0C, 0x10A0F, 0),
    Interval::new(0x10A38, 0x10A3A, 0),
    Interval::new(0x10A3F, 0x10A3F, 0),
    Interval::new(0x10AE5, 0x10AE6, 0),
    Interval::new(0x10D24, 0x10D27, 0),
    Interval::new(0x10EAB, 0x10EAC, 0),
    Interval::new(0x10F46, 0x10F50, 0),
    Interval::new(0x10F82, 0x10F85, 0),
    Interval::new(0x11001, 0x11001, 0),
    Interval::new(0x11038, 0x11046, 0),
    Interval::new(0x11070, 0x11070, 0),
    Interval::new(0x11073, 0x11074, 0),
    Interval::new(0x1107F, 0x11081, 0),
    Interval::new(0x110B3, 0x110B6, 0),
    Interval::new(0x110B9, 0x110BA, 0),
    Interval::new(0x110BD, 0x110BD, 0),
    Interval::new(0x110C2, 0x110C2, 0),
    Interval::new(0x110CD, 0x110CD, 0),
    Interval::new(0x11100, 0x11102, 0),
    Interval::new(0x11127, 0x1112B, 0),
    Interval::new(0x1112D, 0x11134, 0),
    Interval::new(0x11173, 0x11173, 0),
    Interval::new(0x11180, 0x11181, 0),
    Interval::new(0x111B6, 0x111BE, 0),
    Interval::new(0x111C9, 0x111CC, 0),
    Interval::new(0x111CF, 0x111CF, 0),
    Interval::new(0x1122F, 0x11231, 0),
    Interval::new(0x11234, 0x11234, 0),
    Interval::new(0x11236, 0x11237, 0),
    Interval::new(0x1123E, 0x1123E, 0),
    Interval::new(0x112DF, 0x112DF, 0),
    Interval::new(0x112E3, 0x112EA, 0),
    Interval::new(0x11300, 0x11301, 0),
    Interval::new(0x1133B, 0x1133C, 0),
    Interval::new(0x11340, 0x11340, 0),
    Interval::new(0x11366, 0x1136C, 0),
    Interval::new(0x11370, 0x11374, 0),
    Interval::new(0x11438, 0x1143F, 0),
    Interval::new(0x11442, 0x11444, 0),
    Interval::new(0x11446, 0x11446, 0),
    Interval::new(0x1145E, 0x1145E, 0),
    Interval::new(0x114B3, 0x114B8, 0),
    Interval::new(0x114BA, 0x114BA, 0),
    Interval::new(0x114BF, 0x114C0, 0),
    Interval::new(0x114C2, 0x114C3, 0),
    Interval::new(0x115B2, 0x115B5, 0),
    Interval::new(0x115BC, 0x115BD, 0),
    Interval::new(0x115BF, 0x115C0, 0),
    Interval::new(0x115DC, 0x115DD, 0),
    Interval::new(0x11633, 0x1163A, 0),
    Interval::new(0x1163D, 0x1163D, 0),
    Interval::new(0x1163F, 0x11640, 0),
    Interval::new(0x116AB, 0x116AB, 0),
    Interval::new(0x116AD, 0x116AD, 0),
    Interval::new(0x116B0, 0x116B5, 0),
    Interval::new(0x116B7, 0x116B7, 0),
    Interval::new(0x1171D, 0x1171F, 0),
    Interval::new(0x11722, 0x11725, 0),
    Interval::new(0x11727, 0x1172B, 0),
    Interval::new(0x1182F, 0x11837, 0),
    Interval::new(0x11839, 0x1183A, 0),
    Interval::new(0x1193B, 0x1193C, 0),
    Interval::new(0x1193E, 0x1193E, 0),
    Interval::new(0x11943, 0x11943, 0),
    Interval::new(0x119D4, 0x119D7, 0),
    Interval::new(0x119DA, 0x119DB, 0),
    Interval::new(0x119E0, 0x119E0, 0),
    Interval::new(0x11A01, 0x11A0A, 0),
    Interval::new(0x11A33, 0x11A38, 0),
    Interval::new(0x11A3B, 0x11A3E, 0),
    Interval::new(0x11A47, 0x11A47, 0),
    Interval::new(0x11A51, 0x11A56, 0),
    Interval::new(0x11A59, 0x11A5B, 0),
    Interval::new(0x11A8A, 0x11A96, 0),
    Interval::new(0x11A98, 0x11A99, 0),
    Interval::new(0x11C30, 0x11C36, 0),
    Interval::new(0x11C38, 0x11C3D, 0),
    Interval::new(0x11C3F, 0x11C3F, 0),
    Interval::new(0x11C92, 0x11CA7, 0),
    Interval::new(0x11CAA, 0x11CB0, 0),
    Interval::new(0x11CB2, 0x11CB3, 0),
    Interval::new(0x11CB5, 0x11CB6, 0),
    Interval::new(0x11D31, 0x11D36, 0),
    Interval::new(0x11D3A, 0x11D3A, 0),
    Interval::new(0x11D3C, 0x11D3D, 0),
    Interval::new(0x11D3F, 0x11D45, 0),
    Interval::new(0x11D47, 0x11D47, 0),
    Interval::new(0x11D90, 0x11D91, 0),
    Interval::new(0x11D95, 0x11D95, 0),
    Interval::new(0x11D97, 0x11D97, 0),
    Interval::new(0x11EF3, 0x11EF4, 0),
    Interval::new(0x13430, 0x13438, 0),
    Interval::new(0x16AF0, 0x16AF4, 0),
    Interval::new(0x16B30, 0x16B36, 0),
    Interval::new(0x16F4F, 0x16F4F, 0),
    Interval::new(0x16F8F, 0x16F92, 0),
    Interval::new(0x16FE0, 0x16FE3, 2),
    Interval::new(0x16FE4, 0x16FE4, 0),
    Interval::new(0x16FF0, 0x16FF1, 2),
    Interval::new(0x17000, 0x187F7, 2),
    Interval::new(0x18800, 0x18CD5, 2),
    Interval::new(0x18D00, 0x18D08, 2),
    Interval::new(0x1AFF0, 0x1AFF3, 2),
    Interval::new(0x1AFF5, 0x1AFFB, 2),
    Interval::new(0x1AFFD, 0x1AFFE, 2),
    Interval::new(0x1B000, 0x1B122, 2),
    Interval::new(0x1B150, 0x1B152, 2),
    Interval::new(0x1B164, 0x1B167, 2),
    Interval::new(0x1B170, 0x1B2FB, 2),
    Interval::new(0x1BC9D, 0x1BC9E, 0),
    Interval::new(0x1BCA0, 0x1BCA3, 0),
    Interval::new(0x1CF00, 0x1CF2D, 0),
    Interval::new(0x1CF30, 0x1CF46, 0),
    Interval::new(0x1D167, 0x1D169, 0),
    Interval::new(0x1D173, 0x1D182, 0),
    Interval::new(0x1D185, 0x1D18B, 0),
    Interval::new(0x1D1AA, 0x1D1AD, 0),
    Interval::new(0x1D242, 0x1D244, 0),
    Interval::new(0x1DA00, 0x1DA36, 0),
    Interval::new(0x1DA3B, 0x1DA6C, 0),
    Interval::new(0x1DA75, 0x1DA75, 0),
    Interval::new(0x1DA84, 0x1DA84, 0),
    Interval::new(0x1DA9B, 0x1DA9F, 0),
    Interval::new(0x1DAA1, 0x1DAAF, 0),
    Interval::new(0x1E000, 0x1E006, 0),
    Interval::new(0x1E008, 0x1E018, 0),
    Interval::new(0x1E01B, 0x1E021, 0),
    Interval::new(0x1E023, 0x1E024, 0),
    Interval::new(0x1E026, 0x1E02A, 0),
    Interval::new(0x1E130, 0x1E136, 0),
    Interval::new(0x1E2AE, 0x1E2AE, 0),
    Interval::new(0x1E2EC, 0x1E2EF, 0),
    Interval::new(0x1E8D0, 0x1E8D6, 0),
    Interval::new(0x1E944, 0x1E94A, 0),
    Interval::new(0x1F000, 0x1F0FF, 2),
    Interval::new(0x1F10D, 0x1F10F, 2),
    Interval::new(0x1F12F, 0x1F12F, 2),
    Interval::new(0x1F16C, 0x1F171, 2),
    Interval::new(0x1F17E, 0x1F17F, 2),
    Interval::new(0x1F18E, 0x1F18E, 2),
    Interval::new(0x1F191, 0x1F19A, 2),
    Interval::new(0x1F1AD, 0x1F53D, 2),
    Interval::new(0x1F546, 0x1F64F, 2),
    Interval::new(0x1F680, 0x1F6FF, 2),
    Interval::new(0x1F774, 0x1F77F, 2),
    Interval::new(0x1F7D5, 0x1F7FF, 2),
    Interval::new(0x1F80C, 0x1F80F, 2),
    Interval::new(0x1F848, 0x1F84F, 2),
    Interval::new(0x1F85A, 0x1F85F, 2),
    Interval::new(0x1F888, 0x1F88F, 2),
    Interval::new(0x1F8AE, 0x1F8FF, 2),
    Interval::new(0x1F90C, 0x1F93A, 2),
    Interval::new(0x1F93C, 0x1F945, 2),
    Interval::new(0x1F947, 0x1FAFF, 2),
    Interval::new(0x1FC00, 0x1FFFD, 2),
    Interval::new(0x20000, 0x2FFFD, 2),
    Interval::new(0x30000, 0x3FFFD, 2),
    Interval::new(0xE0001, 0xE0001, 0),
    Interval::new(0xE0020, 0xE007F, 0),
    Interval::new(0xE0100, 0xE01EF, 0),
];

/// East Asian Ambiguous codepoints that widen to 2 cells in East Asian mode.
pub static AMBIGUOUS_TABLE: &[Interval] = &[
    Interval::new(0x00A1, 0x00A1, 2),
    Interval::new(0x00A4, 0x00A4, 2),
    Interval::new(0x00A7, 0x00A8, 2),
    Interval::new(0x00AA, 0x00AA, 2),
    Interval::new(0x00AD, 0x00AE, 2),
    Interval::new(0x00B0, 0x00B4, 2),
    Interval::new(0x00B6, 0x00BA, 2),
    Interval::new(0x00BC, 0x00BF, 2),
    Interval::new(0x00C6, 0x00C6, 2),
    Interval::new(0x00D0, 0x00D0, 2),
    Interval::new(0x00D7, 0x00D8, 2),
    Interval::new(0x00DE, 0x00E1, 2),
    Interval::new(0x00E6, 0x00E6, 2),
    Interval::new(0x00E8, 0x00EA, 2),
    Interval::new(0x00EC, 0x00ED, 2),
    Interval::new(0x00F0, 0x00F0, 2),
    Interval::new(0x00F2, 0x00F3, 2),
    Interval::new(0x00F7, 0x00FA, 2),
    Interval::new(0x00FC, 0x00FC, 2),
    Interval::new(0x00FE, 0x00FE, 2),
    Interval::new(0x0101, 0x0101, 2),
    Interval::new(0x0111, 0x0111, 2),
    Interval::new(0x0113, 0x0113, 2),
    Interval::new(0x011B, 0x011B, 2),
    Interval::new(0x0126, 0x0127, 2),
    Interval::new(0x012B, 0x012B, 2),
    Interval::new(0x0131, 0x0133, 2),
    Interval::new(0x0138, 0x0138, 2),
    Interval::new(0x013F, 0x0142, 2),
    Interval::new(0x0144, 0x0144, 2),
    Interval::new(0x0148, 0x014B, 2),
    Interval::new(0x014D, 0x014D, 2),
    Interval::new(0x0152, 0x0153, 2),
    Interval::new(0x0166, 0x0167, 2),
    Interval::new(0x016B, 0x016B, 2),
    Interval::new(0x01CE, 0x01CE, 2),
    Interval::new(0x01D0, 0x01D0, 2),
    Interval::new(0x01D2, 0x01D2, 2),
    Interval::new(0x01D4, 0x01D4, 2),
    Interval::new(0x01D6, 0x01D6, 2),
    Interval::new(0x01D8, 0x01D8, 2),
    Interval::new(0x01DA, 0x01DA, 2),
    Interval::new(0x01DC, 0x01DC, 2),
    Interval::new(0x0251, 0x0251, 2),
    Interval::new(0x0261, 0x0261, 2),
    Interval::new(0x02C4, 0x02C4, 2),
    Interval::new(0x02C7, 0x02C7, 2),
    Interval::new(0x02C9, 0x02CB, 2),
    Interval::new(0x02CD, 0x02CD, 2),
    Interval::new(0x02D0, 0x02D0, 2),
    Interval::new(0x02D8, 0x02DB, 2),
    Interval::new(0x02DD, 0x02DD, 2),
    Interval::new(0x02DF, 0x02DF, 2),
    Interval::new(0x0391, 0x03A1, 2),
    Interval::new(0x03A3, 0x03A9, 2),
    Interval::new(0x03B1, 0x03C1, 2),
    Interval::new(0x03C3, 0x03C9, 2),
    Interval::new(0x0401, 0x0401, 2),
    Interval::new(0x0410, 0x044F, 2),
    Interval::new(0x0451, 0x0451, 2),
    Interval::new(0x2010, 0x2010, 2),
    Interval::new(0x2013, 0x2016, 2),
    Interval::new(0x2018, 0x2019, 2),
    Interval::new(0x201C, 0x201D, 2),
    Interval::new(0x2020, 0x2022, 2),
    Interval::new(0x2024, 0x2027, 2),
    Interval::new(0x2030, 0x2030, 2),
    Interval::new(0x2032, 0x2033, 2),
    Interval::new(0x2035, 0x2035, 2),
    Interval::new(0x203B, 0x203B, 2),
    Interval::new(0x203E, 0x203E, 2),
    Interval::new(0x2074, 0x2074, 2),
    Interval::new(0x207F, 0x207F, 2),
    Interval::new(0x2081, 0x2084, 2),
    Interval::new(0x20AC, 0x20AC, 2),
    Interval::new(0x2103, 0x2103, 2),
    Interval::new(0x2105, 0x2105, 2),
    Interval::new(0x2109, 0x2109, 2),
    Interval::new(0x2113, 0x2113, 2),
    Interval::new(0x2116, 0x2116, 2),
    Interval::new(0x2121, 0x2122, 2),
    Interval::new(0x2126, 0x2126, 2),
    Interval::new(0x212B, 0x212B, 2),
    Interval::new(0x2153, 0x2154, 2),
    Interval::new(0x215B, 0x215E, 2),
    Interval::new(0x2160, 0x216B, 2),
    Interval::new(0x2170, 0x2179, 2),
    Interval::new(0x2189, 0x2189, 2),
    Interval::new(0x2190, 0x2199, 2),
    Interval::new(0x21B8, 0x21B9, 2),
    Interval::new(0x21D2, 0x21D2, 2),
    Interval::new(0x21D4, 0x21D4, 2),
    Interval::new(0x21E7, 0x21E7, 2),
    Interval::new(0x2200, 0x2200, 2),
    Interval::new(0x2202, 0x2203, 2),
    Interval::new(0x2207, 0x2208, 2),
    Interval::new(0x220B, 0x220B, 2),
    Interval::new(0x220F, 0x220F, 2),
    Interval::new(0x2211, 0x2211, 2),
    Interval::new(0x2215, 0x2215, 2),
    Interval::new(0x221A, 0x221A, 2),
    Interval::new(0x221D, 0x2220, 2),
    Interval::new(0x2223, 0x2223, 2),
    Interval::new(0x2225, 0x2225, 2),
    Interval::new(0x2227, 0x222C, 2),
    Interval::new(0x222E, 0x222E, 2),
    Interval::new(0x2234, 0x2237, 2),
    Interval::new(0x223C, 0x223D, 2),
    Interval::new(0x2248, 0x2248, 2),
    Interval::new(0x224C, 0x224C, 2),
    Interval::new(0x2252, 0x2252, 2),
    Interval::new(0x2260, 0x2261, 2),
    Interval::new(0x2264, 0x2267, 2),
    Interval::new(0x226A, 0x226B, 2),
    Interval::new(0x226E, 0x226F, 2),
    Interval::new(0x2282, 0x2283, 2),
    Interval::new(0x2286, 0x2287, 2),
    Interval::new(0x2295, 0x2295, 2),
    Interval::new(0x2299, 0x2299, 2),
    Interval::new(0x22A5, 0x22A5, 2),
    Interval::new(0x22BF, 0x22BF, 2),
    Interval::new(0x2312, 0x2312, 2),
    Interval::new(0x2500, 0x254B, 2),
    Interval::new(0x2550, 0x2573, 2),
    Interval::new(0x25A0, 0x25A1, 2),
    Interval::new(0x25A3, 0x25A9, 2),
    Interval::new(0x25B2, 0x25B3, 2),
    Interval::new(0x25B6, 0x25B7, 2),
    Interval::new(0x25BC, 0x25BD, 2),
    Interval::new(0x25C0, 0x25C1, 2),
    Interval::new(0x25C6, 0x25C8, 2),
    Interval::new(0x25CB, 0x25CB, 2),
    Interval::new(0x25CE, 0x25D1, 2),
    Interval::new(0x25E2, 0x25E5, 2),
    Interval::new(0x25EF, 0x25EF, 2),
    Interval::new(0x2605, 0x2606, 2),
    Interval::new(0x2609, 0x2609, 2),
    Interval::new(0x260E, 0x260F, 2),
    Interval::new(0x261C, 0x261C, 2),
    Interval::new(0x261E, 0x261E, 2),
    Interval::new(0x2640, 0x2640, 2),
    Interval::new(0x2642, 0x2642, 2),
    Interval::new(0x2660, 0x2661, 2),
    Interval::new(0x2663, 0x2665, 2),
    Interval::new(0x2667, 0x266A, 2),
    Interval::new(0x266C, 0x266D, 2),
    Interval::new(0x266F, 0x266F, 2),
    Interval::new(0x269E, 0x269F, 2),
    Interval::new(0x26BF, 0x26BF, 2),
    Interval::new(0x26C6, 0x26CD, 2),
    Interval::new(0x26CF, 0x26D3, 2),
    Interval::new(0x26D5, 0x26E1, 2),
    Interval::new(0x26E3, 0x26E3, 2),
    Interval::new(0x26E8, 0x26E9, 2),
    Interval::new(0x26EB, 0x26F1, 2),
    Interval::new(0x26F4, 0x26F4, 2),
    Interval::new(0x26F6, 0x26F9, 2),
    Interval::new(0x26FB, 0x26FC, 2),
    Interval::new(0x26FE, 0x26FF, 2),
    Interval::new(0x273D, 0x273D, 2),
    Interval::new(0x2776, 0x277F, 2),
    Interval::new(0x2B56, 0x2B59, 2),
    Interval::new(0x3248, 0x324F, 2),
    Interval::new(0xFFFD, 0xFFFD, 2),
    Interval::new(0x1F100, 0x1F10A, 2),
    Interval::new(0x1F110, 0x1F12D, 2),
    Interval::new(0x1F130, 0x1F169, 2),
    Interval::new(0x1F172, 0x1F17D, 2),
    Interval::new(0x1F180, 0x1F18D, 2),
    Interval::new(0x1F18F, 0x1F190, 2),
    Interval::new(0x1F19B, 0x1F1AC, 2),
];
