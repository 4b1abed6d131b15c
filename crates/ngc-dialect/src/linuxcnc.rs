//! LinuxCNC tables, see <http://linuxcnc.org/docs/stable/html/gcode/rs274ngc.html>.
//!
//! LinuxCNC accepts all baseline RS274/NGC words except the `G84` and
//! `G87` canned cycles, and adds splines, lathe modes, extra probes and
//! I/O control. The word table below is the merged result; the letter
//! table is shared with the baseline.

use ngc_util::WordInfo;

/// Reference grammar. Differences from the baseline: named parameters
/// (`#<name>`), named parameter assignment, and semicolon comments.
pub(crate) const GRAMMAR: &str = r##"
line < block_delete_character? line_number? (word / comment / parameter_setting / named_parameter_setting)* semicolon_comment? EndOfFile

EndOfFile <- !.

unary_operator < ~([aA][bB][sS] / [aA][cC][oO][sS] / [aA][sS][iI][nN] / [aA][tT][aA][nN]
                 / [cC][oO][sS] / [eE][xX][pP] / [fF][iI][xX] / [fF][uU][pP] / [lL][nN]
                 / [rR][oO][uU][nN][dD] / [sS][iI][nN] / [sS][qQ][rR][tT] / [tT][aA][nN])
l1_operator < ~("+" / "-" / [aA][nN][dD] / [oO][rR] / [xX][oO][rR])
l2_operator < ~("*" / "/")
l3_operator < ~("**")

comment < [(] ~(![)] . )* [)]

semicolon_comment < ";" ~(.*) EndOfFile

block_delete_character <- ~("/")
parameter_setting < "#" integer "=" real_value
named_parameter_setting < "#<" ~(![>] .)+ ">" "=" real_value
line_number < "N" integer
word < ~([a-zA-Z]) word_number

real_value <- (number / expression / parameter_value / unary_operation)

word_number < ~("+" / "-")? real_value

parameter_value <- numeric_parameter / named_parameter
numeric_parameter < "#" (integer / expression)
named_parameter < "#<" ~(![>] .)+ ">"

expression < "[" l1_operation "]"

unary_operation < unary_operator expression
l1_operation < l2_operation (l1_operator l2_operation)*
l2_operation < l3_operation (l2_operator l3_operation)*
l3_operation < operand (l3_operator operand)*
operand < ~("+" / "-")? real_value

number <- float / integer
integer < ~("-"?[0-9 \t]+)
float < ~("-"?[0-9 \t]*"."[0-9 \t]+)
"##;

pub(crate) const WORDS: &[(&str, WordInfo)] = &[
    // Non-modal
    ("G4", WordInfo { name: "Dwell", modal_group: 0, ordering: 100 }),
    ("G10", WordInfo { name: "Coordinate system or tool table data", modal_group: 0, ordering: 190 }),
    ("G28", WordInfo { name: "Go/set predefined position", modal_group: 0, ordering: 190 }),
    ("G30", WordInfo { name: "Go/set predefined position", modal_group: 0, ordering: 190 }),
    ("G52", WordInfo { name: "Local coordinate system offset", modal_group: 0, ordering: 190 }),
    ("G53", WordInfo { name: "Move in machine coordinates", modal_group: 0, ordering: 200 }),
    ("G92", WordInfo { name: "Coordinate system offset", modal_group: 0, ordering: 190 }),
    ("G92.1", WordInfo { name: "Reset G92 offsets", modal_group: 0, ordering: 190 }),
    ("G92.2", WordInfo { name: "Reset G92 offsets", modal_group: 0, ordering: 190 }),
    ("G92.3", WordInfo { name: "Restore G92 offsets", modal_group: 0, ordering: 190 }),
    // GCode modal group 1
    ("G0", WordInfo { name: "Rapid move", modal_group: 1, ordering: 210 }),
    ("G1", WordInfo { name: "Linear move", modal_group: 1, ordering: 210 }),
    ("G2", WordInfo { name: "Clockwise arc", modal_group: 1, ordering: 210 }),
    ("G3", WordInfo { name: "Counterclockwise arc", modal_group: 1, ordering: 210 }),
    ("G5", WordInfo { name: "Cubic spline", modal_group: 1, ordering: 210 }),
    ("G5.1", WordInfo { name: "Quadratic spline", modal_group: 1, ordering: 210 }),
    ("G5.2", WordInfo { name: "NURBS block", modal_group: 1, ordering: 210 }),
    ("G5.3", WordInfo { name: "NURBS block", modal_group: 1, ordering: 210 }),
    ("G33", WordInfo { name: "Spindle synchronized motion", modal_group: 1, ordering: 210 }),
    ("G33.1", WordInfo { name: "Rigid tapping", modal_group: 1, ordering: 210 }),
    ("G38.2", WordInfo { name: "Straight probe (towards piece with alarm)", modal_group: 1, ordering: 210 }),
    ("G38.3", WordInfo { name: "Straight probe (towards piece without alarm)", modal_group: 1, ordering: 210 }),
    ("G38.4", WordInfo { name: "Straight probe (away from piece with alarm)", modal_group: 1, ordering: 210 }),
    ("G38.5", WordInfo { name: "Straight probe (away from piece without alarm)", modal_group: 1, ordering: 210 }),
    ("G73", WordInfo { name: "Drilling cycle with chip breaking", modal_group: 1, ordering: 210 }),
    ("G74", WordInfo { name: "Left-hand tapping cycle, dwell", modal_group: 1, ordering: 210 }),
    ("G76", WordInfo { name: "Threading cycle", modal_group: 1, ordering: 210 }),
    ("G80", WordInfo { name: "Cancel canned cycle", modal_group: 1, ordering: 210 }),
    ("G81", WordInfo { name: "Drilling cycle", modal_group: 1, ordering: 210 }),
    ("G82", WordInfo { name: "Drilling cycle, dwell", modal_group: 1, ordering: 210 }),
    ("G83", WordInfo { name: "Drilling cycle, peck", modal_group: 1, ordering: 210 }),
    ("G85", WordInfo { name: "Boring cycle, feed out", modal_group: 1, ordering: 210 }),
    ("G86", WordInfo { name: "Boring cycle, dwell", modal_group: 1, ordering: 210 }),
    ("G88", WordInfo { name: "Boring cycle, dwell", modal_group: 1, ordering: 210 }),
    ("G89", WordInfo { name: "Boring cycle, dwell", modal_group: 1, ordering: 210 }),
    // GCode modal group 2
    ("G17", WordInfo { name: "Select XY plane", modal_group: 2, ordering: 110 }),
    ("G17.1", WordInfo { name: "Select UV plane", modal_group: 2, ordering: 110 }),
    ("G18", WordInfo { name: "Select ZX plane", modal_group: 2, ordering: 110 }),
    ("G18.1", WordInfo { name: "Select WU plane", modal_group: 2, ordering: 110 }),
    ("G19", WordInfo { name: "Select YZ plane", modal_group: 2, ordering: 110 }),
    ("G19.1", WordInfo { name: "Select VW plane", modal_group: 2, ordering: 110 }),
    // GCode modal group 3
    ("G90", WordInfo { name: "Absolute distance mode", modal_group: 3, ordering: 170 }),
    ("G91", WordInfo { name: "Incremental distance mode", modal_group: 3, ordering: 170 }),
    // GCode modal group 4
    ("G90.1", WordInfo { name: "Arc absolute distance mode", modal_group: 4, ordering: 170 }),
    ("G91.1", WordInfo { name: "Arc incremental distance mode", modal_group: 4, ordering: 170 }),
    // GCode modal group 5
    ("G93", WordInfo { name: "Inverse time mode", modal_group: 5, ordering: 20 }),
    ("G94", WordInfo { name: "Units per minute mode", modal_group: 5, ordering: 20 }),
    ("G95", WordInfo { name: "Units per revolution mode", modal_group: 5, ordering: 20 }),
    // GCode modal group 6
    ("G20", WordInfo { name: "Use inches", modal_group: 6, ordering: 120 }),
    ("G21", WordInfo { name: "Use mm", modal_group: 6, ordering: 120 }),
    // GCode modal group 7
    ("G40", WordInfo { name: "Cutter radius compensation off", modal_group: 7, ordering: 130 }),
    ("G41", WordInfo { name: "Cutter compensation (left of path)", modal_group: 7, ordering: 130 }),
    ("G41.1", WordInfo { name: "Dynamic cutter compensation (left of path)", modal_group: 7, ordering: 130 }),
    ("G42", WordInfo { name: "Cutter compensation (right of path)", modal_group: 7, ordering: 130 }),
    ("G42.1", WordInfo { name: "Dynamic cutter compensation (right of path)", modal_group: 7, ordering: 130 }),
    // GCode modal group 8
    ("G43", WordInfo { name: "Tool length offset", modal_group: 8, ordering: 140 }),
    ("G43.1", WordInfo { name: "Dynamic tool length offset", modal_group: 8, ordering: 140 }),
    ("G43.2", WordInfo { name: "Apply additional tool length offset", modal_group: 8, ordering: 140 }),
    ("G49", WordInfo { name: "Cancel tool length compensation", modal_group: 8, ordering: 140 }),
    // GCode modal group 10
    ("G98", WordInfo { name: "Canned cycle return level", modal_group: 10, ordering: 180 }),
    ("G99", WordInfo { name: "Canned cycle return level", modal_group: 10, ordering: 180 }),
    // GCode modal group 12
    ("G54", WordInfo { name: "Select coordinate system 1", modal_group: 12, ordering: 150 }),
    ("G55", WordInfo { name: "Select coordinate system 2", modal_group: 12, ordering: 150 }),
    ("G56", WordInfo { name: "Select coordinate system 3", modal_group: 12, ordering: 150 }),
    ("G57", WordInfo { name: "Select coordinate system 4", modal_group: 12, ordering: 150 }),
    ("G58", WordInfo { name: "Select coordinate system 5", modal_group: 12, ordering: 150 }),
    ("G59", WordInfo { name: "Select coordinate system 6", modal_group: 12, ordering: 150 }),
    ("G59.1", WordInfo { name: "Select coordinate system 7", modal_group: 12, ordering: 150 }),
    ("G59.2", WordInfo { name: "Select coordinate system 8", modal_group: 12, ordering: 150 }),
    ("G59.3", WordInfo { name: "Select coordinate system 9", modal_group: 12, ordering: 150 }),
    // GCode modal group 13
    ("G61", WordInfo { name: "Exact path mode", modal_group: 13, ordering: 160 }),
    ("G61.1", WordInfo { name: "Exact stop mode", modal_group: 13, ordering: 160 }),
    ("G64", WordInfo { name: "Path blending", modal_group: 13, ordering: 160 }),
    // GCode modal group 14
    ("G96", WordInfo { name: "Spindle constant surface speed mode", modal_group: 14, ordering: 170 }),
    ("G97", WordInfo { name: "Spindle RPM mode", modal_group: 14, ordering: 170 }),
    // GCode modal group 15
    ("G7", WordInfo { name: "Lathe diameter mode", modal_group: 15, ordering: 170 }),
    ("G8", WordInfo { name: "Lathe radius mode", modal_group: 15, ordering: 170 }),
    // MCode modal group 4
    ("M0", WordInfo { name: "Pause", modal_group: 4, ordering: 220 }),
    ("M1", WordInfo { name: "Optional stop", modal_group: 4, ordering: 220 }),
    ("M2", WordInfo { name: "Program end", modal_group: 4, ordering: 220 }),
    ("M30", WordInfo { name: "Program end, exchange pallet shuttles", modal_group: 4, ordering: 220 }),
    // MCode modal group 5
    ("M62", WordInfo { name: "Digital output control", modal_group: 5, ordering: 55 }),
    ("M63", WordInfo { name: "Digital output control", modal_group: 5, ordering: 55 }),
    ("M64", WordInfo { name: "Digital output control", modal_group: 5, ordering: 55 }),
    ("M65", WordInfo { name: "Digital output control", modal_group: 5, ordering: 55 }),
    ("M66", WordInfo { name: "Wait on input", modal_group: 5, ordering: 55 }),
    ("M67", WordInfo { name: "Analog output, synchronized", modal_group: 5, ordering: 55 }),
    ("M68", WordInfo { name: "Analog output, immediate", modal_group: 5, ordering: 55 }),
    // MCode modal group 6
    ("M6", WordInfo { name: "Change tool", modal_group: 6, ordering: 60 }),
    ("M61", WordInfo { name: "Set current tool", modal_group: 6, ordering: 60 }),
    // MCode modal group 7
    ("M3", WordInfo { name: "Spindle clockwise", modal_group: 7, ordering: 70 }),
    ("M4", WordInfo { name: "Spindle counterclockwise", modal_group: 7, ordering: 70 }),
    ("M5", WordInfo { name: "Stop spindle", modal_group: 7, ordering: 70 }),
    // MCode modal group 8
    ("M7", WordInfo { name: "Mist coolant on", modal_group: 8, ordering: 80 }),
    ("M8", WordInfo { name: "Flood coolant on", modal_group: 8, ordering: 80 }),
    ("M9", WordInfo { name: "Coolant off", modal_group: 8, ordering: 80 }),
    // MCode modal group 9
    ("M48", WordInfo { name: "Enable override controls", modal_group: 9, ordering: 90 }),
    ("M49", WordInfo { name: "Disable override controls", modal_group: 9, ordering: 90 }),
    ("M50", WordInfo { name: "Feed override control", modal_group: 9, ordering: 90 }),
    ("M51", WordInfo { name: "Spindle speed override control", modal_group: 9, ordering: 90 }),
    ("M52", WordInfo { name: "Adaptive feed control", modal_group: 9, ordering: 90 }),
    ("M53", WordInfo { name: "Feed stop control", modal_group: 9, ordering: 90 }),
    // MCode modal group 10
    ("M70", WordInfo { name: "Save modal state", modal_group: 10, ordering: 75 }),
    ("M71", WordInfo { name: "Invalidate stored modal state", modal_group: 10, ordering: 75 }),
    ("M72", WordInfo { name: "Restore modal state", modal_group: 10, ordering: 75 }),
];
