//! Case-fold tables for codepoints outside ASCII.
//!
//! Two index pairings over the same 666 mappings (Latin supplements and
//! extensions, IPA, Greek, Cyrillic, Armenian, Georgian, fullwidth forms),
//! each sorted by its lookup key for binary search. `I` is the uppercase of
//! both `i` and dotless `\u{131}`; the downward table keeps only `i`.

/// Lowercase codepoint to its uppercase counterpart, sorted by lowercase.
pub(crate) const LOWER_TO_UPPER: [(char, char); 666] = [
    ('\u{0061}', '\u{0041}'), ('\u{0062}', '\u{0042}'), ('\u{0063}', '\u{0043}'),
    ('\u{0064}', '\u{0044}'), ('\u{0065}', '\u{0045}'), ('\u{0066}', '\u{0046}'),
    ('\u{0067}', '\u{0047}'), ('\u{0068}', '\u{0048}'), ('\u{0069}', '\u{0049}'),
    ('\u{006A}', '\u{004A}'), ('\u{006B}', '\u{004B}'), ('\u{006C}', '\u{004C}'),
    ('\u{006D}', '\u{004D}'), ('\u{006E}', '\u{004E}'), ('\u{006F}', '\u{004F}'),
    ('\u{0070}', '\u{0050}'), ('\u{0071}', '\u{0051}'), ('\u{0072}', '\u{0052}'),
    ('\u{0073}', '\u{0053}'), ('\u{0074}', '\u{0054}'), ('\u{0075}', '\u{0055}'),
    ('\u{0076}', '\u{0056}'), ('\u{0077}', '\u{0057}'), ('\u{0078}', '\u{0058}'),
    ('\u{0079}', '\u{0059}'), ('\u{007A}', '\u{005A}'), ('\u{00E0}', '\u{00C0}'),
    ('\u{00E1}', '\u{00C1}'), ('\u{00E2}', '\u{00C2}'), ('\u{00E3}', '\u{00C3}'),
    ('\u{00E4}', '\u{00C4}'), ('\u{00E5}', '\u{00C5}'), ('\u{00E6}', '\u{00C6}'),
    ('\u{00E7}', '\u{00C7}'), ('\u{00E8}', '\u{00C8}'), ('\u{00E9}', '\u{00C9}'),
    ('\u{00EA}', '\u{00CA}'), ('\u{00EB}', '\u{00CB}'), ('\u{00EC}', '\u{00CC}'),
    ('\u{00ED}', '\u{00CD}'), ('\u{00EE}', '\u{00CE}'), ('\u{00EF}', '\u{00CF}'),
    ('\u{00F0}', '\u{00D0}'), ('\u{00F1}', '\u{00D1}'), ('\u{00F2}', '\u{00D2}'),
    ('\u{00F3}', '\u{00D3}'), ('\u{00F4}', '\u{00D4}'), ('\u{00F5}', '\u{00D5}'),
    ('\u{00F6}', '\u{00D6}'), ('\u{00F8}', '\u{00D8}'), ('\u{00F9}', '\u{00D9}'),
    ('\u{00FA}', '\u{00DA}'), ('\u{00FB}', '\u{00DB}'), ('\u{00FC}', '\u{00DC}'),
    ('\u{00FD}', '\u{00DD}'), ('\u{00FE}', '\u{00DE}'), ('\u{00FF}', '\u{0178}'),
    ('\u{0101}', '\u{0100}'), ('\u{0103}', '\u{0102}'), ('\u{0105}', '\u{0104}'),
    ('\u{0107}', '\u{0106}'), ('\u{0109}', '\u{0108}'), ('\u{010B}', '\u{010A}'),
    ('\u{010D}', '\u{010C}'), ('\u{010F}', '\u{010E}'), ('\u{0111}', '\u{0110}'),
    ('\u{0113}', '\u{0112}'), ('\u{0115}', '\u{0114}'), ('\u{0117}', '\u{0116}'),
    ('\u{0119}', '\u{0118}'), ('\u{011B}', '\u{011A}'), ('\u{011D}', '\u{011C}'),
    ('\u{011F}', '\u{011E}'), ('\u{0121}', '\u{0120}'), ('\u{0123}', '\u{0122}'),
    ('\u{0125}', '\u{0124}'), ('\u{0127}', '\u{0126}'), ('\u{0129}', '\u{0128}'),
    ('\u{012B}', '\u{012A}'), ('\u{012D}', '\u{012C}'), ('\u{012F}', '\u{012E}'),
    ('\u{0131}', '\u{0049}'), ('\u{0133}', '\u{0132}'), ('\u{0135}', '\u{0134}'),
    ('\u{0137}', '\u{0136}'), ('\u{013A}', '\u{0139}'), ('\u{013C}', '\u{013B}'),
    ('\u{013E}', '\u{013D}'), ('\u{0140}', '\u{013F}'), ('\u{0142}', '\u{0141}'),
    ('\u{0144}', '\u{0143}'), ('\u{0146}', '\u{0145}'), ('\u{0148}', '\u{0147}'),
    ('\u{014B}', '\u{014A}'), ('\u{014D}', '\u{014C}'), ('\u{014F}', '\u{014E}'),
    ('\u{0151}', '\u{0150}'), ('\u{0153}', '\u{0152}'), ('\u{0155}', '\u{0154}'),
    ('\u{0157}', '\u{0156}'), ('\u{0159}', '\u{0158}'), ('\u{015B}', '\u{015A}'),
    ('\u{015D}', '\u{015C}'), ('\u{015F}', '\u{015E}'), ('\u{0161}', '\u{0160}'),
    ('\u{0163}', '\u{0162}'), ('\u{0165}', '\u{0164}'), ('\u{0167}', '\u{0166}'),
    ('\u{0169}', '\u{0168}'), ('\u{016B}', '\u{016A}'), ('\u{016D}', '\u{016C}'),
    ('\u{016F}', '\u{016E}'), ('\u{0171}', '\u{0170}'), ('\u{0173}', '\u{0172}'),
    ('\u{0175}', '\u{0174}'), ('\u{0177}', '\u{0176}'), ('\u{017A}', '\u{0179}'),
    ('\u{017C}', '\u{017B}'), ('\u{017E}', '\u{017D}'), ('\u{0183}', '\u{0182}'),
    ('\u{0185}', '\u{0184}'), ('\u{0188}', '\u{0187}'), ('\u{018C}', '\u{018B}'),
    ('\u{0192}', '\u{0191}'), ('\u{0199}', '\u{0198}'), ('\u{01A1}', '\u{01A0}'),
    ('\u{01A3}', '\u{01A2}'), ('\u{01A5}', '\u{01A4}'), ('\u{01A8}', '\u{01A7}'),
    ('\u{01AD}', '\u{01AC}'), ('\u{01B0}', '\u{01AF}'), ('\u{01B4}', '\u{01B3}'),
    ('\u{01B6}', '\u{01B5}'), ('\u{01B9}', '\u{01B8}'), ('\u{01BD}', '\u{01BC}'),
    ('\u{01C6}', '\u{01C4}'), ('\u{01C9}', '\u{01C7}'), ('\u{01CC}', '\u{01CA}'),
    ('\u{01CE}', '\u{01CD}'), ('\u{01D0}', '\u{01CF}'), ('\u{01D2}', '\u{01D1}'),
    ('\u{01D4}', '\u{01D3}'), ('\u{01D6}', '\u{01D5}'), ('\u{01D8}', '\u{01D7}'),
    ('\u{01DA}', '\u{01D9}'), ('\u{01DC}', '\u{01DB}'), ('\u{01DF}', '\u{01DE}'),
    ('\u{01E1}', '\u{01E0}'), ('\u{01E3}', '\u{01E2}'), ('\u{01E5}', '\u{01E4}'),
    ('\u{01E7}', '\u{01E6}'), ('\u{01E9}', '\u{01E8}'), ('\u{01EB}', '\u{01EA}'),
    ('\u{01ED}', '\u{01EC}'), ('\u{01EF}', '\u{01EE}'), ('\u{01F3}', '\u{01F1}'),
    ('\u{01F5}', '\u{01F4}'), ('\u{01FB}', '\u{01FA}'), ('\u{01FD}', '\u{01FC}'),
    ('\u{01FF}', '\u{01FE}'), ('\u{0201}', '\u{0200}'), ('\u{0203}', '\u{0202}'),
    ('\u{0205}', '\u{0204}'), ('\u{0207}', '\u{0206}'), ('\u{0209}', '\u{0208}'),
    ('\u{020B}', '\u{020A}'), ('\u{020D}', '\u{020C}'), ('\u{020F}', '\u{020E}'),
    ('\u{0211}', '\u{0210}'), ('\u{0213}', '\u{0212}'), ('\u{0215}', '\u{0214}'),
    ('\u{0217}', '\u{0216}'), ('\u{0253}', '\u{0181}'), ('\u{0254}', '\u{0186}'),
    ('\u{0257}', '\u{018A}'), ('\u{0258}', '\u{018E}'), ('\u{0259}', '\u{018F}'),
    ('\u{025B}', '\u{0190}'), ('\u{0260}', '\u{0193}'), ('\u{0263}', '\u{0194}'),
    ('\u{0268}', '\u{0197}'), ('\u{0269}', '\u{0196}'), ('\u{026F}', '\u{019C}'),
    ('\u{0272}', '\u{019D}'), ('\u{0275}', '\u{019F}'), ('\u{0283}', '\u{01A9}'),
    ('\u{0288}', '\u{01AE}'), ('\u{028A}', '\u{01B1}'), ('\u{028B}', '\u{01B2}'),
    ('\u{0292}', '\u{01B7}'), ('\u{03AC}', '\u{0386}'), ('\u{03AD}', '\u{0388}'),
    ('\u{03AE}', '\u{0389}'), ('\u{03AF}', '\u{038A}'), ('\u{03B1}', '\u{0391}'),
    ('\u{03B2}', '\u{0392}'), ('\u{03B3}', '\u{0393}'), ('\u{03B4}', '\u{0394}'),
    ('\u{03B5}', '\u{0395}'), ('\u{03B6}', '\u{0396}'), ('\u{03B7}', '\u{0397}'),
    ('\u{03B8}', '\u{0398}'), ('\u{03B9}', '\u{0399}'), ('\u{03BA}', '\u{039A}'),
    ('\u{03BB}', '\u{039B}'), ('\u{03BC}', '\u{039C}'), ('\u{03BD}', '\u{039D}'),
    ('\u{03BE}', '\u{039E}'), ('\u{03BF}', '\u{039F}'), ('\u{03C0}', '\u{03A0}'),
    ('\u{03C1}', '\u{03A1}'), ('\u{03C3}', '\u{03A3}'), ('\u{03C4}', '\u{03A4}'),
    ('\u{03C5}', '\u{03A5}'), ('\u{03C6}', '\u{03A6}'), ('\u{03C7}', '\u{03A7}'),
    ('\u{03C8}', '\u{03A8}'), ('\u{03C9}', '\u{03A9}'), ('\u{03CA}', '\u{03AA}'),
    ('\u{03CB}', '\u{03AB}'), ('\u{03CC}', '\u{038C}'), ('\u{03CD}', '\u{038E}'),
    ('\u{03CE}', '\u{038F}'), ('\u{03E3}', '\u{03E2}'), ('\u{03E5}', '\u{03E4}'),
    ('\u{03E7}', '\u{03E6}'), ('\u{03E9}', '\u{03E8}'), ('\u{03EB}', '\u{03EA}'),
    ('\u{03ED}', '\u{03EC}'), ('\u{03EF}', '\u{03EE}'), ('\u{0430}', '\u{0410}'),
    ('\u{0431}', '\u{0411}'), ('\u{0432}', '\u{0412}'), ('\u{0433}', '\u{0413}'),
    ('\u{0434}', '\u{0414}'), ('\u{0435}', '\u{0415}'), ('\u{0436}', '\u{0416}'),
    ('\u{0437}', '\u{0417}'), ('\u{0438}', '\u{0418}'), ('\u{0439}', '\u{0419}'),
    ('\u{043A}', '\u{041A}'), ('\u{043B}', '\u{041B}'), ('\u{043C}', '\u{041C}'),
    ('\u{043D}', '\u{041D}'), ('\u{043E}', '\u{041E}'), ('\u{043F}', '\u{041F}'),
    ('\u{0440}', '\u{0420}'), ('\u{0441}', '\u{0421}'), ('\u{0442}', '\u{0422}'),
    ('\u{0443}', '\u{0423}'), ('\u{0444}', '\u{0424}'), ('\u{0445}', '\u{0425}'),
    ('\u{0446}', '\u{0426}'), ('\u{0447}', '\u{0427}'), ('\u{0448}', '\u{0428}'),
    ('\u{0449}', '\u{0429}'), ('\u{044A}', '\u{042A}'), ('\u{044B}', '\u{042B}'),
    ('\u{044C}', '\u{042C}'), ('\u{044D}', '\u{042D}'), ('\u{044E}', '\u{042E}'),
    ('\u{044F}', '\u{042F}'), ('\u{0451}', '\u{0401}'), ('\u{0452}', '\u{0402}'),
    ('\u{0453}', '\u{0403}'), ('\u{0454}', '\u{0404}'), ('\u{0455}', '\u{0405}'),
    ('\u{0456}', '\u{0406}'), ('\u{0457}', '\u{0407}'), ('\u{0458}', '\u{0408}'),
    ('\u{0459}', '\u{0409}'), ('\u{045A}', '\u{040A}'), ('\u{045B}', '\u{040B}'),
    ('\u{045C}', '\u{040C}'), ('\u{045E}', '\u{040E}'), ('\u{045F}', '\u{040F}'),
    ('\u{0461}', '\u{0460}'), ('\u{0463}', '\u{0462}'), ('\u{0465}', '\u{0464}'),
    ('\u{0467}', '\u{0466}'), ('\u{0469}', '\u{0468}'), ('\u{046B}', '\u{046A}'),
    ('\u{046D}', '\u{046C}'), ('\u{046F}', '\u{046E}'), ('\u{0471}', '\u{0470}'),
    ('\u{0473}', '\u{0472}'), ('\u{0475}', '\u{0474}'), ('\u{0477}', '\u{0476}'),
    ('\u{0479}', '\u{0478}'), ('\u{047B}', '\u{047A}'), ('\u{047D}', '\u{047C}'),
    ('\u{047F}', '\u{047E}'), ('\u{0481}', '\u{0480}'), ('\u{0491}', '\u{0490}'),
    ('\u{0493}', '\u{0492}'), ('\u{0495}', '\u{0494}'), ('\u{0497}', '\u{0496}'),
    ('\u{0499}', '\u{0498}'), ('\u{049B}', '\u{049A}'), ('\u{049D}', '\u{049C}'),
    ('\u{049F}', '\u{049E}'), ('\u{04A1}', '\u{04A0}'), ('\u{04A3}', '\u{04A2}'),
    ('\u{04A5}', '\u{04A4}'), ('\u{04A7}', '\u{04A6}'), ('\u{04A9}', '\u{04A8}'),
    ('\u{04AB}', '\u{04AA}'), ('\u{04AD}', '\u{04AC}'), ('\u{04AF}', '\u{04AE}'),
    ('\u{04B1}', '\u{04B0}'), ('\u{04B3}', '\u{04B2}'), ('\u{04B5}', '\u{04B4}'),
    ('\u{04B7}', '\u{04B6}'), ('\u{04B9}', '\u{04B8}'), ('\u{04BB}', '\u{04BA}'),
    ('\u{04BD}', '\u{04BC}'), ('\u{04BF}', '\u{04BE}'), ('\u{04C2}', '\u{04C1}'),
    ('\u{04C4}', '\u{04C3}'), ('\u{04C8}', '\u{04C7}'), ('\u{04CC}', '\u{04CB}'),
    ('\u{04D1}', '\u{04D0}'), ('\u{04D3}', '\u{04D2}'), ('\u{04D5}', '\u{04D4}'),
    ('\u{04D7}', '\u{04D6}'), ('\u{04D9}', '\u{04D8}'), ('\u{04DB}', '\u{04DA}'),
    ('\u{04DD}', '\u{04DC}'), ('\u{04DF}', '\u{04DE}'), ('\u{04E1}', '\u{04E0}'),
    ('\u{04E3}', '\u{04E2}'), ('\u{04E5}', '\u{04E4}'), ('\u{04E7}', '\u{04E6}'),
    ('\u{04E9}', '\u{04E8}'), ('\u{04EB}', '\u{04EA}'), ('\u{04EF}', '\u{04EE}'),
    ('\u{04F1}', '\u{04F0}'), ('\u{04F3}', '\u{04F2}'), ('\u{04F5}', '\u{04F4}'),
    ('\u{04F9}', '\u{04F8}'), ('\u{0561}', '\u{0531}'), ('\u{0562}', '\u{0532}'),
    ('\u{0563}', '\u{0533}'), ('\u{0564}', '\u{0534}'), ('\u{0565}', '\u{0535}'),
    ('\u{0566}', '\u{0536}'), ('\u{0567}', '\u{0537}'), ('\u{0568}', '\u{0538}'),
    ('\u{0569}', '\u{0539}'), ('\u{056A}', '\u{053A}'), ('\u{056B}', '\u{053B}'),
    ('\u{056C}', '\u{053C}'), ('\u{056D}', '\u{053D}'), ('\u{056E}', '\u{053E}'),
    ('\u{056F}', '\u{053F}'), ('\u{0570}', '\u{0540}'), ('\u{0571}', '\u{0541}'),
    ('\u{0572}', '\u{0542}'), ('\u{0573}', '\u{0543}'), ('\u{0574}', '\u{0544}'),
    ('\u{0575}', '\u{0545}'), ('\u{0576}', '\u{0546}'), ('\u{0577}', '\u{0547}'),
    ('\u{0578}', '\u{0548}'), ('\u{0579}', '\u{0549}'), ('\u{057A}', '\u{054A}'),
    ('\u{057B}', '\u{054B}'), ('\u{057C}', '\u{054C}'), ('\u{057D}', '\u{054D}'),
    ('\u{057E}', '\u{054E}'), ('\u{057F}', '\u{054F}'), ('\u{0580}', '\u{0550}'),
    ('\u{0581}', '\u{0551}'), ('\u{0582}', '\u{0552}'), ('\u{0583}', '\u{0553}'),
    ('\u{0584}', '\u{0554}'), ('\u{0585}', '\u{0555}'), ('\u{0586}', '\u{0556}'),
    ('\u{10D0}', '\u{10A0}'), ('\u{10D1}', '\u{10A1}'), ('\u{10D2}', '\u{10A2}'),
    ('\u{10D3}', '\u{10A3}'), ('\u{10D4}', '\u{10A4}'), ('\u{10D5}', '\u{10A5}'),
    ('\u{10D6}', '\u{10A6}'), ('\u{10D7}', '\u{10A7}'), ('\u{10D8}', '\u{10A8}'),
    ('\u{10D9}', '\u{10A9}'), ('\u{10DA}', '\u{10AA}'), ('\u{10DB}', '\u{10AB}'),
    ('\u{10DC}', '\u{10AC}'), ('\u{10DD}', '\u{10AD}'), ('\u{10DE}', '\u{10AE}'),
    ('\u{10DF}', '\u{10AF}'), ('\u{10E0}', '\u{10B0}'), ('\u{10E1}', '\u{10B1}'),
    ('\u{10E2}', '\u{10B2}'), ('\u{10E3}', '\u{10B3}'), ('\u{10E4}', '\u{10B4}'),
    ('\u{10E5}', '\u{10B5}'), ('\u{10E6}', '\u{10B6}'), ('\u{10E7}', '\u{10B7}'),
    ('\u{10E8}', '\u{10B8}'), ('\u{10E9}', '\u{10B9}'), ('\u{10EA}', '\u{10BA}'),
    ('\u{10EB}', '\u{10BB}'), ('\u{10EC}', '\u{10BC}'), ('\u{10ED}', '\u{10BD}'),
    ('\u{10EE}', '\u{10BE}'), ('\u{10EF}', '\u{10BF}'), ('\u{10F0}', '\u{10C0}'),
    ('\u{10F1}', '\u{10C1}'), ('\u{10F2}', '\u{10C2}'), ('\u{10F3}', '\u{10C3}'),
    ('\u{10F4}', '\u{10C4}'), ('\u{10F5}', '\u{10C5}'), ('\u{1E01}', '\u{1E00}'),
    ('\u{1E03}', '\u{1E02}'), ('\u{1E05}', '\u{1E04}'), ('\u{1E07}', '\u{1E06}'),
    ('\u{1E09}', '\u{1E08}'), ('\u{1E0B}', '\u{1E0A}'), ('\u{1E0D}', '\u{1E0C}'),
    ('\u{1E0F}', '\u{1E0E}'), ('\u{1E11}', '\u{1E10}'), ('\u{1E13}', '\u{1E12}'),
    ('\u{1E15}', '\u{1E14}'), ('\u{1E17}', '\u{1E16}'), ('\u{1E19}', '\u{1E18}'),
    ('\u{1E1B}', '\u{1E1A}'), ('\u{1E1D}', '\u{1E1C}'), ('\u{1E1F}', '\u{1E1E}'),
    ('\u{1E21}', '\u{1E20}'), ('\u{1E23}', '\u{1E22}'), ('\u{1E25}', '\u{1E24}'),
    ('\u{1E27}', '\u{1E26}'), ('\u{1E29}', '\u{1E28}'), ('\u{1E2B}', '\u{1E2A}'),
    ('\u{1E2D}', '\u{1E2C}'), ('\u{1E2F}', '\u{1E2E}'), ('\u{1E31}', '\u{1E30}'),
    ('\u{1E33}', '\u{1E32}'), ('\u{1E35}', '\u{1E34}'), ('\u{1E37}', '\u{1E36}'),
    ('\u{1E39}', '\u{1E38}'), ('\u{1E3B}', '\u{1E3A}'), ('\u{1E3D}', '\u{1E3C}'),
    ('\u{1E3F}', '\u{1E3E}'), ('\u{1E41}', '\u{1E40}'), ('\u{1E43}', '\u{1E42}'),
    ('\u{1E45}', '\u{1E44}'), ('\u{1E47}', '\u{1E46}'), ('\u{1E49}', '\u{1E48}'),
    ('\u{1E4B}', '\u{1E4A}'), ('\u{1E4D}', '\u{1E4C}'), ('\u{1E4F}', '\u{1E4E}'),
    ('\u{1E51}', '\u{1E50}'), ('\u{1E53}', '\u{1E52}'), ('\u{1E55}', '\u{1E54}'),
    ('\u{1E57}', '\u{1E56}'), ('\u{1E59}', '\u{1E58}'), ('\u{1E5B}', '\u{1E5A}'),
    ('\u{1E5D}', '\u{1E5C}'), ('\u{1E5F}', '\u{1E5E}'), ('\u{1E61}', '\u{1E60}'),
    ('\u{1E63}', '\u{1E62}'), ('\u{1E65}', '\u{1E64}'), ('\u{1E67}', '\u{1E66}'),
    ('\u{1E69}', '\u{1E68}'), ('\u{1E6B}', '\u{1E6A}'), ('\u{1E6D}', '\u{1E6C}'),
    ('\u{1E6F}', '\u{1E6E}'), ('\u{1E71}', '\u{1E70}'), ('\u{1E73}', '\u{1E72}'),
    ('\u{1E75}', '\u{1E74}'), ('\u{1E77}', '\u{1E76}'), ('\u{1E79}', '\u{1E78}'),
    ('\u{1E7B}', '\u{1E7A}'), ('\u{1E7D}', '\u{1E7C}'), ('\u{1E7F}', '\u{1E7E}'),
    ('\u{1E81}', '\u{1E80}'), ('\u{1E83}', '\u{1E82}'), ('\u{1E85}', '\u{1E84}'),
    ('\u{1E87}', '\u{1E86}'), ('\u{1E89}', '\u{1E88}'), ('\u{1E8B}', '\u{1E8A}'),
    ('\u{1E8D}', '\u{1E8C}'), ('\u{1E8F}', '\u{1E8E}'), ('\u{1E91}', '\u{1E90}'),
    ('\u{1E93}', '\u{1E92}'), ('\u{1E95}', '\u{1E94}'), ('\u{1EA1}', '\u{1EA0}'),
    ('\u{1EA3}', '\u{1EA2}'), ('\u{1EA5}', '\u{1EA4}'), ('\u{1EA7}', '\u{1EA6}'),
    ('\u{1EA9}', '\u{1EA8}'), ('\u{1EAB}', '\u{1EAA}'), ('\u{1EAD}', '\u{1EAC}'),
    ('\u{1EAF}', '\u{1EAE}'), ('\u{1EB1}', '\u{1EB0}'), ('\u{1EB3}', '\u{1EB2}'),
    ('\u{1EB5}', '\u{1EB4}'), ('\u{1EB7}', '\u{1EB6}'), ('\u{1EB9}', '\u{1EB8}'),
    ('\u{1EBB}', '\u{1EBA}'), ('\u{1EBD}', '\u{1EBC}'), ('\u{1EBF}', '\u{1EBE}'),
    ('\u{1EC1}', '\u{1EC0}'), ('\u{1EC3}', '\u{1EC2}'), ('\u{1EC5}', '\u{1EC4}'),
    ('\u{1EC7}', '\u{1EC6}'), ('\u{1EC9}', '\u{1EC8}'), ('\u{1ECB}', '\u{1ECA}'),
    ('\u{1ECD}', '\u{1ECC}'), ('\u{1ECF}', '\u{1ECE}'), ('\u{1ED1}', '\u{1ED0}'),
    ('\u{1ED3}', '\u{1ED2}'), ('\u{1ED5}', '\u{1ED4}'), ('\u{1ED7}', '\u{1ED6}'),
    ('\u{1ED9}', '\u{1ED8}'), ('\u{1EDB}', '\u{1EDA}'), ('\u{1EDD}', '\u{1EDC}'),
    ('\u{1EDF}', '\u{1EDE}'), ('\u{1EE1}', '\u{1EE0}'), ('\u{1EE3}', '\u{1EE2}'),
    ('\u{1EE5}', '\u{1EE4}'), ('\u{1EE7}', '\u{1EE6}'), ('\u{1EE9}', '\u{1EE8}'),
    ('\u{1EEB}', '\u{1EEA}'), ('\u{1EED}', '\u{1EEC}'), ('\u{1EEF}', '\u{1EEE}'),
    ('\u{1EF1}', '\u{1EF0}'), ('\u{1EF3}', '\u{1EF2}'), ('\u{1EF5}', '\u{1EF4}'),
    ('\u{1EF7}', '\u{1EF6}'), ('\u{1EF9}', '\u{1EF8}'), ('\u{1F00}', '\u{1F08}'),
    ('\u{1F01}', '\u{1F09}'), ('\u{1F02}', '\u{1F0A}'), ('\u{1F03}', '\u{1F0B}'),
    ('\u{1F04}', '\u{1F0C}'), ('\u{1F05}', '\u{1F0D}'), ('\u{1F06}', '\u{1F0E}'),
    ('\u{1F07}', '\u{1F0F}'), ('\u{1F10}', '\u{1F18}'), ('\u{1F11}', '\u{1F19}'),
    ('\u{1F12}', '\u{1F1A}'), ('\u{1F13}', '\u{1F1B}'), ('\u{1F14}', '\u{1F1C}'),
    ('\u{1F15}', '\u{1F1D}'), ('\u{1F20}', '\u{1F28}'), ('\u{1F21}', '\u{1F29}'),
    ('\u{1F22}', '\u{1F2A}'), ('\u{1F23}', '\u{1F2B}'), ('\u{1F24}', '\u{1F2C}'),
    ('\u{1F25}', '\u{1F2D}'), ('\u{1F26}', '\u{1F2E}'), ('\u{1F27}', '\u{1F2F}'),
    ('\u{1F30}', '\u{1F38}'), ('\u{1F31}', '\u{1F39}'), ('\u{1F32}', '\u{1F3A}'),
    ('\u{1F33}', '\u{1F3B}'), ('\u{1F34}', '\u{1F3C}'), ('\u{1F35}', '\u{1F3D}'),
    ('\u{1F36}', '\u{1F3E}'), ('\u{1F37}', '\u{1F3F}'), ('\u{1F40}', '\u{1F48}'),
    ('\u{1F41}', '\u{1F49}'), ('\u{1F42}', '\u{1F4A}'), ('\u{1F43}', '\u{1F4B}'),
    ('\u{1F44}', '\u{1F4C}'), ('\u{1F45}', '\u{1F4D}'), ('\u{1F51}', '\u{1F59}'),
    ('\u{1F53}', '\u{1F5B}'), ('\u{1F55}', '\u{1F5D}'), ('\u{1F57}', '\u{1F5F}'),
    ('\u{1F60}', '\u{1F68}'), ('\u{1F61}', '\u{1F69}'), ('\u{1F62}', '\u{1F6A}'),
    ('\u{1F63}', '\u{1F6B}'), ('\u{1F64}', '\u{1F6C}'), ('\u{1F65}', '\u{1F6D}'),
    ('\u{1F66}', '\u{1F6E}'), ('\u{1F67}', '\u{1F6F}'), ('\u{1F80}', '\u{1F88}'),
    ('\u{1F81}', '\u{1F89}'), ('\u{1F82}', '\u{1F8A}'), ('\u{1F83}', '\u{1F8B}'),
    ('\u{1F84}', '\u{1F8C}'), ('\u{1F85}', '\u{1F8D}'), ('\u{1F86}', '\u{1F8E}'),
    ('\u{1F87}', '\u{1F8F}'), ('\u{1F90}', '\u{1F98}'), ('\u{1F91}', '\u{1F99}'),
    ('\u{1F92}', '\u{1F9A}'), ('\u{1F93}', '\u{1F9B}'), ('\u{1F94}', '\u{1F9C}'),
    ('\u{1F95}', '\u{1F9D}'), ('\u{1F96}', '\u{1F9E}'), ('\u{1F97}', '\u{1F9F}'),
    ('\u{1FA0}', '\u{1FA8}'), ('\u{1FA1}', '\u{1FA9}'), ('\u{1FA2}', '\u{1FAA}'),
    ('\u{1FA3}', '\u{1FAB}'), ('\u{1FA4}', '\u{1FAC}'), ('\u{1FA5}', '\u{1FAD}'),
    ('\u{1FA6}', '\u{1FAE}'), ('\u{1FA7}', '\u{1FAF}'), ('\u{1FB0}', '\u{1FB8}'),
    ('\u{1FB1}', '\u{1FB9}'), ('\u{1FD0}', '\u{1FD8}'), ('\u{1FD1}', '\u{1FD9}'),
    ('\u{1FE0}', '\u{1FE8}'), ('\u{1FE1}', '\u{1FE9}'), ('\u{24D0}', '\u{24B6}'),
    ('\u{24D1}', '\u{24B7}'), ('\u{24D2}', '\u{24B8}'), ('\u{24D3}', '\u{24B9}'),
    ('\u{24D4}', '\u{24BA}'), ('\u{24D5}', '\u{24BB}'), ('\u{24D6}', '\u{24BC}'),
    ('\u{24D7}', '\u{24BD}'), ('\u{24D8}', '\u{24BE}'), ('\u{24D9}', '\u{24BF}'),
    ('\u{24DA}', '\u{24C0}'), ('\u{24DB}', '\u{24C1}'), ('\u{24DC}', '\u{24C2}'),
    ('\u{24DD}', '\u{24C3}'), ('\u{24DE}', '\u{24C4}'), ('\u{24DF}', '\u{24C5}'),
    ('\u{24E0}', '\u{24C6}'), ('\u{24E1}', '\u{24C7}'), ('\u{24E2}', '\u{24C8}'),
    ('\u{24E3}', '\u{24C9}'), ('\u{24E4}', '\u{24CA}'), ('\u{24E5}', '\u{24CB}'),
    ('\u{24E6}', '\u{24CC}'), ('\u{24E7}', '\u{24CD}'), ('\u{24E8}', '\u{24CE}'),
    ('\u{24E9}', '\u{24CF}'), ('\u{FF41}', '\u{FF21}'), ('\u{FF42}', '\u{FF22}'),
    ('\u{FF43}', '\u{FF23}'), ('\u{FF44}', '\u{FF24}'), ('\u{FF45}', '\u{FF25}'),
    ('\u{FF46}', '\u{FF26}'), ('\u{FF47}', '\u{FF27}'), ('\u{FF48}', '\u{FF28}'),
    ('\u{FF49}', '\u{FF29}'), ('\u{FF4A}', '\u{FF2A}'), ('\u{FF4B}', '\u{FF2B}'),
    ('\u{FF4C}', '\u{FF2C}'), ('\u{FF4D}', '\u{FF2D}'), ('\u{FF4E}', '\u{FF2E}'),
    ('\u{FF4F}', '\u{FF2F}'), ('\u{FF50}', '\u{FF30}'), ('\u{FF51}', '\u{FF31}'),
    ('\u{FF52}', '\u{FF32}'), ('\u{FF53}', '\u{FF33}'), ('\u{FF54}', '\u{FF34}'),
    ('\u{FF55}', '\u{FF35}'), ('\u{FF56}', '\u{FF36}'), ('\u{FF57}', '\u{FF37}'),
    ('\u{FF58}', '\u{FF38}'), ('\u{FF59}', '\u{FF39}'), ('\u{FF5A}', '\u{FF3A}'),
];

/// Uppercase codepoint to its lowercase counterpart, sorted by uppercase.
pub(crate) const UPPER_TO_LOWER: [(char, char); 665] = [
    ('\u{0041}', '\u{0061}'), ('\u{0042}', '\u{0062}'), ('\u{0043}', '\u{0063}'),
    ('\u{0044}', '\u{0064}'), ('\u{0045}', '\u{0065}'), ('\u{0046}', '\u{0066}'),
    ('\u{0047}', '\u{0067}'), ('\u{0048}', '\u{0068}'), ('\u{0049}', '\u{0069}'),
    ('\u{004A}', '\u{006A}'), ('\u{004B}', '\u{006B}'), ('\u{004C}', '\u{006C}'),
    ('\u{004D}', '\u{006D}'), ('\u{004E}', '\u{006E}'), ('\u{004F}', '\u{006F}'),
    ('\u{0050}', '\u{0070}'), ('\u{0051}', '\u{0071}'), ('\u{0052}', '\u{0072}'),
    ('\u{0053}', '\u{0073}'), ('\u{0054}', '\u{0074}'), ('\u{0055}', '\u{0075}'),
    ('\u{0056}', '\u{0076}'), ('\u{0057}', '\u{0077}'), ('\u{0058}', '\u{0078}'),
    ('\u{0059}', '\u{0079}'), ('\u{005A}', '\u{007A}'), ('\u{00C0}', '\u{00E0}'),
    ('\u{00C1}', '\u{00E1}'), ('\u{00C2}', '\u{00E2}'), ('\u{00C3}', '\u{00E3}'),
    ('\u{00C4}', '\u{00E4}'), ('\u{00C5}', '\u{00E5}'), ('\u{00C6}', '\u{00E6}'),
    ('\u{00C7}', '\u{00E7}'), ('\u{00C8}', '\u{00E8}'), ('\u{00C9}', '\u{00E9}'),
    ('\u{00CA}', '\u{00EA}'), ('\u{00CB}', '\u{00EB}'), ('\u{00CC}', '\u{00EC}'),
    ('\u{00CD}', '\u{00ED}'), ('\u{00CE}', '\u{00EE}'), ('\u{00CF}', '\u{00EF}'),
    ('\u{00D0}', '\u{00F0}'), ('\u{00D1}', '\u{00F1}'), ('\u{00D2}', '\u{00F2}'),
    ('\u{00D3}', '\u{00F3}'), ('\u{00D4}', '\u{00F4}'), ('\u{00D5}', '\u{00F5}'),
    ('\u{00D6}', '\u{00F6}'), ('\u{00D8}', '\u{00F8}'), ('\u{00D9}', '\u{00F9}'),
    ('\u{00DA}', '\u{00FA}'), ('\u{00DB}', '\u{00FB}'), ('\u{00DC}', '\u{00FC}'),
    ('\u{00DD}', '\u{00FD}'), ('\u{00DE}', '\u{00FE}'), ('\u{0100}', '\u{0101}'),
    ('\u{0102}', '\u{0103}'), ('\u{0104}', '\u{0105}'), ('\u{0106}', '\u{0107}'),
    ('\u{0108}', '\u{0109}'), ('\u{010A}', '\u{010B}'), ('\u{010C}', '\u{010D}'),
    ('\u{010E}', '\u{010F}'), ('\u{0110}', '\u{0111}'), ('\u{0112}', '\u{0113}'),
    ('\u{0114}', '\u{0115}'), ('\u{0116}', '\u{0117}'), ('\u{0118}', '\u{0119}'),
    ('\u{011A}', '\u{011B}'), ('\u{011C}', '\u{011D}'), ('\u{011E}', '\u{011F}'),
    ('\u{0120}', '\u{0121}'), ('\u{0122}', '\u{0123}'), ('\u{0124}', '\u{0125}'),
    ('\u{0126}', '\u{0127}'), ('\u{0128}', '\u{0129}'), ('\u{012A}', '\u{012B}'),
    ('\u{012C}', '\u{012D}'), ('\u{012E}', '\u{012F}'), ('\u{0132}', '\u{0133}'),
    ('\u{0134}', '\u{0135}'), ('\u{0136}', '\u{0137}'), ('\u{0139}', '\u{013A}'),
    ('\u{013B}', '\u{013C}'), ('\u{013D}', '\u{013E}'), ('\u{013F}', '\u{0140}'),
    ('\u{0141}', '\u{0142}'), ('\u{0143}', '\u{0144}'), ('\u{0145}', '\u{0146}'),
    ('\u{0147}', '\u{0148}'), ('\u{014A}', '\u{014B}'), ('\u{014C}', '\u{014D}'),
    ('\u{014E}', '\u{014F}'), ('\u{0150}', '\u{0151}'), ('\u{0152}', '\u{0153}'),
    ('\u{0154}', '\u{0155}'), ('\u{0156}', '\u{0157}'), ('\u{0158}', '\u{0159}'),
    ('\u{015A}', '\u{015B}'), ('\u{015C}', '\u{015D}'), ('\u{015E}', '\u{015F}'),
    ('\u{0160}', '\u{0161}'), ('\u{0162}', '\u{0163}'), ('\u{0164}', '\u{0165}'),
    ('\u{0166}', '\u{0167}'), ('\u{0168}', '\u{0169}'), ('\u{016A}', '\u{016B}'),
    ('\u{016C}', '\u{016D}'), ('\u{016E}', '\u{016F}'), ('\u{0170}', '\u{0171}'),
    ('\u{0172}', '\u{0173}'), ('\u{0174}', '\u{0175}'), ('\u{0176}', '\u{0177}'),
    ('\u{0178}', '\u{00FF}'), ('\u{0179}', '\u{017A}'), ('\u{017B}', '\u{017C}'),
    ('\u{017D}', '\u{017E}'), ('\u{0181}', '\u{0253}'), ('\u{0182}', '\u{0183}'),
    ('\u{0184}', '\u{0185}'), ('\u{0186}', '\u{0254}'), ('\u{0187}', '\u{0188}'),
    ('\u{018A}', '\u{0257}'), ('\u{018B}', '\u{018C}'), ('\u{018E}', '\u{0258}'),
    ('\u{018F}', '\u{0259}'), ('\u{0190}', '\u{025B}'), ('\u{0191}', '\u{0192}'),
    ('\u{0193}', '\u{0260}'), ('\u{0194}', '\u{0263}'), ('\u{0196}', '\u{0269}'),
    ('\u{0197}', '\u{0268}'), ('\u{0198}', '\u{0199}'), ('\u{019C}', '\u{026F}'),
    ('\u{019D}', '\u{0272}'), ('\u{019F}', '\u{0275}'), ('\u{01A0}', '\u{01A1}'),
    ('\u{01A2}', '\u{01A3}'), ('\u{01A4}', '\u{01A5}'), ('\u{01A7}', '\u{01A8}'),
    ('\u{01A9}', '\u{0283}'), ('\u{01AC}', '\u{01AD}'), ('\u{01AE}', '\u{0288}'),
    ('\u{01AF}', '\u{01B0}'), ('\u{01B1}', '\u{028A}'), ('\u{01B2}', '\u{028B}'),
    ('\u{01B3}', '\u{01B4}'), ('\u{01B5}', '\u{01B6}'), ('\u{01B7}', '\u{0292}'),
    ('\u{01B8}', '\u{01B9}'), ('\u{01BC}', '\u{01BD}'), ('\u{01C4}', '\u{01C6}'),
    ('\u{01C7}', '\u{01C9}'), ('\u{01CA}', '\u{01CC}'), ('\u{01CD}', '\u{01CE}'),
    ('\u{01CF}', '\u{01D0}'), ('\u{01D1}', '\u{01D2}'), ('\u{01D3}', '\u{01D4}'),
    ('\u{01D5}', '\u{01D6}'), ('\u{01D7}', '\u{01D8}'), ('\u{01D9}', '\u{01DA}'),
    ('\u{01DB}', '\u{01DC}'), ('\u{01DE}', '\u{01DF}'), ('\u{01E0}', '\u{01E1}'),
    ('\u{01E2}', '\u{01E3}'), ('\u{01E4}', '\u{01E5}'), ('\u{01E6}', '\u{01E7}'),
    ('\u{01E8}', '\u{01E9}'), ('\u{01EA}', '\u{01EB}'), ('\u{01EC}', '\u{01ED}'),
    ('\u{01EE}', '\u{01EF}'), ('\u{01F1}', '\u{01F3}'), ('\u{01F4}', '\u{01F5}'),
    ('\u{01FA}', '\u{01FB}'), ('\u{01FC}', '\u{01FD}'), ('\u{01FE}', '\u{01FF}'),
    ('\u{0200}', '\u{0201}'), ('\u{0202}', '\u{0203}'), ('\u{0204}', '\u{0205}'),
    ('\u{0206}', '\u{0207}'), ('\u{0208}', '\u{0209}'), ('\u{020A}', '\u{020B}'),
    ('\u{020C}', '\u{020D}'), ('\u{020E}', '\u{020F}'), ('\u{0210}', '\u{0211}'),
    ('\u{0212}', '\u{0213}'), ('\u{0214}', '\u{0215}'), ('\u{0216}', '\u{0217}'),
    ('\u{0386}', '\u{03AC}'), ('\u{0388}', '\u{03AD}'), ('\u{0389}', '\u{03AE}'),
    ('\u{038A}', '\u{03AF}'), ('\u{038C}', '\u{03CC}'), ('\u{038E}', '\u{03CD}'),
    ('\u{038F}', '\u{03CE}'), ('\u{0391}', '\u{03B1}'), ('\u{0392}', '\u{03B2}'),
    ('\u{0393}', '\u{03B3}'), ('\u{0394}', '\u{03B4}'), ('\u{0395}', '\u{03B5}'),
    ('\u{0396}', '\u{03B6}'), ('\u{0397}', '\u{03B7}'), ('\u{0398}', '\u{03B8}'),
    ('\u{0399}', '\u{03B9}'), ('\u{039A}', '\u{03BA}'), ('\u{039B}', '\u{03BB}'),
    ('\u{039C}', '\u{03BC}'), ('\u{039D}', '\u{03BD}'), ('\u{039E}', '\u{03BE}'),
    ('\u{039F}', '\u{03BF}'), ('\u{03A0}', '\u{03C0}'), ('\u{03A1}', '\u{03C1}'),
    ('\u{03A3}', '\u{03C3}'), ('\u{03A4}', '\u{03C4}'), ('\u{03A5}', '\u{03C5}'),
    ('\u{03A6}', '\u{03C6}'), ('\u{03A7}', '\u{03C7}'), ('\u{03A8}', '\u{03C8}'),
    ('\u{03A9}', '\u{03C9}'), ('\u{03AA}', '\u{03CA}'), ('\u{03AB}', '\u{03CB}'),
    ('\u{03E2}', '\u{03E3}'), ('\u{03E4}', '\u{03E5}'), ('\u{03E6}', '\u{03E7}'),
    ('\u{03E8}', '\u{03E9}'), ('\u{03EA}', '\u{03EB}'), ('\u{03EC}', '\u{03ED}'),
    ('\u{03EE}', '\u{03EF}'), ('\u{0401}', '\u{0451}'), ('\u{0402}', '\u{0452}'),
    ('\u{0403}', '\u{0453}'), ('\u{0404}', '\u{0454}'), ('\u{0405}', '\u{0455}'),
    ('\u{0406}', '\u{0456}'), ('\u{0407}', '\u{0457}'), ('\u{0408}', '\u{0458}'),
    ('\u{0409}', '\u{0459}'), ('\u{040A}', '\u{045A}'), ('\u{040B}', '\u{045B}'),
    ('\u{040C}', '\u{045C}'), ('\u{040E}', '\u{045E}'), ('\u{040F}', '\u{045F}'),
    ('\u{0410}', '\u{0430}'), ('\u{0411}', '\u{0431}'), ('\u{0412}', '\u{0432}'),
    ('\u{0413}', '\u{0433}'), ('\u{0414}', '\u{0434}'), ('\u{0415}', '\u{0435}'),
    ('\u{0416}', '\u{0436}'), ('\u{0417}', '\u{0437}'), ('\u{0418}', '\u{0438}'),
    ('\u{0419}', '\u{0439}'), ('\u{041A}', '\u{043A}'), ('\u{041B}', '\u{043B}'),
    ('\u{041C}', '\u{043C}'), ('\u{041D}', '\u{043D}'), ('\u{041E}', '\u{043E}'),
    ('\u{041F}', '\u{043F}'), ('\u{0420}', '\u{0440}'), ('\u{0421}', '\u{0441}'),
    ('\u{0422}', '\u{0442}'), ('\u{0423}', '\u{0443}'), ('\u{0424}', '\u{0444}'),
    ('\u{0425}', '\u{0445}'), ('\u{0426}', '\u{0446}'), ('\u{0427}', '\u{0447}'),
    ('\u{0428}', '\u{0448}'), ('\u{0429}', '\u{0449}'), ('\u{042A}', '\u{044A}'),
    ('\u{042B}', '\u{044B}'), ('\u{042C}', '\u{044C}'), ('\u{042D}', '\u{044D}'),
    ('\u{042E}', '\u{044E}'), ('\u{042F}', '\u{044F}'), ('\u{0460}', '\u{0461}'),
    ('\u{0462}', '\u{0463}'), ('\u{0464}', '\u{0465}'), ('\u{0466}', '\u{0467}'),
    ('\u{0468}', '\u{0469}'), ('\u{046A}', '\u{046B}'), ('\u{046C}', '\u{046D}'),
    ('\u{046E}', '\u{046F}'), ('\u{0470}', '\u{0471}'), ('\u{0472}', '\u{0473}'),
    ('\u{0474}', '\u{0475}'), ('\u{0476}', '\u{0477}'), ('\u{0478}', '\u{0479}'),
    ('\u{047A}', '\u{047B}'), ('\u{047C}', '\u{047D}'), ('\u{047E}', '\u{047F}'),
    ('\u{0480}', '\u{0481}'), ('\u{0490}', '\u{0491}'), ('\u{0492}', '\u{0493}'),
    ('\u{0494}', '\u{0495}'), ('\u{0496}', '\u{0497}'), ('\u{0498}', '\u{0499}'),
    ('\u{049A}', '\u{049B}'), ('\u{049C}', '\u{049D}'), ('\u{049E}', '\u{049F}'),
    ('\u{04A0}', '\u{04A1}'), ('\u{04A2}', '\u{04A3}'), ('\u{04A4}', '\u{04A5}'),
    ('\u{04A6}', '\u{04A7}'), ('\u{04A8}', '\u{04A9}'), ('\u{04AA}', '\u{04AB}'),
    ('\u{04AC}', '\u{04AD}'), ('\u{04AE}', '\u{04AF}'), ('\u{04B0}', '\u{04B1}'),
    ('\u{04B2}', '\u{04B3}'), ('\u{04B4}', '\u{04B5}'), ('\u{04B6}', '\u{04B7}'),
    ('\u{04B8}', '\u{04B9}'), ('\u{04BA}', '\u{04BB}'), ('\u{04BC}', '\u{04BD}'),
    ('\u{04BE}', '\u{04BF}'), ('\u{04C1}', '\u{04C2}'), ('\u{04C3}', '\u{04C4}'),
    ('\u{04C7}', '\u{04C8}'), ('\u{04CB}', '\u{04CC}'), ('\u{04D0}', '\u{04D1}'),
    ('\u{04D2}', '\u{04D3}'), ('\u{04D4}', '\u{04D5}'), ('\u{04D6}', '\u{04D7}'),
    ('\u{04D8}', '\u{04D9}'), ('\u{04DA}', '\u{04DB}'), ('\u{04DC}', '\u{04DD}'),
    ('\u{04DE}', '\u{04DF}'), ('\u{04E0}', '\u{04E1}'), ('\u{04E2}', '\u{04E3}'),
    ('\u{04E4}', '\u{04E5}'), ('\u{04E6}', '\u{04E7}'), ('\u{04E8}', '\u{04E9}'),
    ('\u{04EA}', '\u{04EB}'), ('\u{04EE}', '\u{04EF}'), ('\u{04F0}', '\u{04F1}'),
    ('\u{04F2}', '\u{04F3}'), ('\u{04F4}', '\u{04F5}'), ('\u{04F8}', '\u{04F9}'),
    ('\u{0531}', '\u{0561}'), ('\u{0532}', '\u{0562}'), ('\u{0533}', '\u{0563}'),
    ('\u{0534}', '\u{0564}'), ('\u{0535}', '\u{0565}'), ('\u{0536}', '\u{0566}'),
    ('\u{0537}', '\u{0567}'), ('\u{0538}', '\u{0568}'), ('\u{0539}', '\u{0569}'),
    ('\u{053A}', '\u{056A}'), ('\u{053B}', '\u{056B}'), ('\u{053C}', '\u{056C}'),
    ('\u{053D}', '\u{056D}'), ('\u{053E}', '\u{056E}'), ('\u{053F}', '\u{056F}'),
    ('\u{0540}', '\u{0570}'), ('\u{0541}', '\u{0571}'), ('\u{0542}', '\u{0572}'),
    ('\u{0543}', '\u{0573}'), ('\u{0544}', '\u{0574}'), ('\u{0545}', '\u{0575}'),
    ('\u{0546}', '\u{0576}'), ('\u{0547}', '\u{0577}'), ('\u{0548}', '\u{0578}'),
    ('\u{0549}', '\u{0579}'), ('\u{054A}', '\u{057A}'), ('\u{054B}', '\u{057B}'),
    ('\u{054C}', '\u{057C}'), ('\u{054D}', '\u{057D}'), ('\u{054E}', '\u{057E}'),
    ('\u{054F}', '\u{057F}'), ('\u{0550}', '\u{0580}'), ('\u{0551}', '\u{0581}'),
    ('\u{0552}', '\u{0582}'), ('\u{0553}', '\u{0583}'), ('\u{0554}', '\u{0584}'),
    ('\u{0555}', '\u{0585}'), ('\u{0556}', '\u{0586}'), ('\u{10A0}', '\u{10D0}'),
    ('\u{10A1}', '\u{10D1}'), ('\u{10A2}', '\u{10D2}'), ('\u{10A3}', '\u{10D3}'),
    ('\u{10A4}', '\u{10D4}'), ('\u{10A5}', '\u{10D5}'), ('\u{10A6}', '\u{10D6}'),
    ('\u{10A7}', '\u{10D7}'), ('\u{10A8}', '\u{10D8}'), ('\u{10A9}', '\u{10D9}'),
    ('\u{10AA}', '\u{10DA}'), ('\u{10AB}', '\u{10DB}'), ('\u{10AC}', '\u{10DC}'),
    ('\u{10AD}', '\u{10DD}'), ('\u{10AE}', '\u{10DE}'), ('\u{10AF}', '\u{10DF}'),
    ('\u{10B0}', '\u{10E0}'), ('\u{10B1}', '\u{10E1}'), ('\u{10B2}', '\u{10E2}'),
    ('\u{10B3}', '\u{10E3}'), ('\u{10B4}', '\u{10E4}'), ('\u{10B5}', '\u{10E5}'),
    ('\u{10B6}', '\u{10E6}'), ('\u{10B7}', '\u{10E7}'), ('\u{10B8}', '\u{10E8}'),
    ('\u{10B9}', '\u{10E9}'), ('\u{10BA}', '\u{10EA}'), ('\u{10BB}', '\u{10EB}'),
    ('\u{10BC}', '\u{10EC}'), ('\u{10BD}', '\u{10ED}'), ('\u{10BE}', '\u{10EE}'),
    ('\u{10BF}', '\u{10EF}'), ('\u{10C0}', '\u{10F0}'), ('\u{10C1}', '\u{10F1}'),
    ('\u{10C2}', '\u{10F2}'), ('\u{10C3}', '\u{10F3}'), ('\u{10C4}', '\u{10F4}'),
    ('\u{10C5}', '\u{10F5}'), ('\u{1E00}', '\u{1E01}'), ('\u{1E02}', '\u{1E03}'),
    ('\u{1E04}', '\u{1E05}'), ('\u{1E06}', '\u{1E07}'), ('\u{1E08}', '\u{1E09}'),
    ('\u{1E0A}', '\u{1E0B}'), ('\u{1E0C}', '\u{1E0D}'), ('\u{1E0E}', '\u{1E0F}'),
    ('\u{1E10}', '\u{1E11}'), ('\u{1E12}', '\u{1E13}'), ('\u{1E14}', '\u{1E15}'),
    ('\u{1E16}', '\u{1E17}'), ('\u{1E18}', '\u{1E19}'), ('\u{1E1A}', '\u{1E1B}'),
    ('\u{1E1C}', '\u{1E1D}'), ('\u{1E1E}', '\u{1E1F}'), ('\u{1E20}', '\u{1E21}'),
    ('\u{1E22}', '\u{1E23}'), ('\u{1E24}', '\u{1E25}'), ('\u{1E26}', '\u{1E27}'),
    ('\u{1E28}', '\u{1E29}'), ('\u{1E2A}', '\u{1E2B}'), ('\u{1E2C}', '\u{1E2D}'),
    ('\u{1E2E}', '\u{1E2F}'), ('\u{1E30}', '\u{1E31}'), ('\u{1E32}', '\u{1E33}'),
    ('\u{1E34}', '\u{1E35}'), ('\u{1E36}', '\u{1E37}'), ('\u{1E38}', '\u{1E39}'),
    ('\u{1E3A}', '\u{1E3B}'), ('\u{1E3C}', '\u{1E3D}'), ('\u{1E3E}', '\u{1E3F}'),
    ('\u{1E40}', '\u{1E41}'), ('\u{1E42}', '\u{1E43}'), ('\u{1E44}', '\u{1E45}'),
    ('\u{1E46}', '\u{1E47}'), ('\u{1E48}', '\u{1E49}'), ('\u{1E4A}', '\u{1E4B}'),
    ('\u{1E4C}', '\u{1E4D}'), ('\u{1E4E}', '\u{1E4F}'), ('\u{1E50}', '\u{1E51}'),
    ('\u{1E52}', '\u{1E53}'), ('\u{1E54}', '\u{1E55}'), ('\u{1E56}', '\u{1E57}'),
    ('\u{1E58}', '\u{1E59}'), ('\u{1E5A}', '\u{1E5B}'), ('\u{1E5C}', '\u{1E5D}'),
    ('\u{1E5E}', '\u{1E5F}'), ('\u{1E60}', '\u{1E61}'), ('\u{1E62}', '\u{1E63}'),
    ('\u{1E64}', '\u{1E65}'), ('\u{1E66}', '\u{1E67}'), ('\u{1E68}', '\u{1E69}'),
    ('\u{1E6A}', '\u{1E6B}'), ('\u{1E6C}', '\u{1E6D}'), ('\u{1E6E}', '\u{1E6F}'),
    ('\u{1E70}', '\u{1E71}'), ('\u{1E72}', '\u{1E73}'), ('\u{1E74}', '\u{1E75}'),
    ('\u{1E76}', '\u{1E77}'), ('\u{1E78}', '\u{1E79}'), ('\u{1E7A}', '\u{1E7B}'),
    ('\u{1E7C}', '\u{1E7D}'), ('\u{1E7E}', '\u{1E7F}'), ('\u{1E80}', '\u{1E81}'),
    ('\u{1E82}', '\u{1E83}'), ('\u{1E84}', '\u{1E85}'), ('\u{1E86}', '\u{1E87}'),
    ('\u{1E88}', '\u{1E89}'), ('\u{1E8A}', '\u{1E8B}'), ('\u{1E8C}', '\u{1E8D}'),
    ('\u{1E8E}', '\u{1E8F}'), ('\u{1E90}', '\u{1E91}'), ('\u{1E92}', '\u{1E93}'),
    ('\u{1E94}', '\u{1E95}'), ('\u{1EA0}', '\u{1EA1}'), ('\u{1EA2}', '\u{1EA3}'),
    ('\u{1EA4}', '\u{1EA5}'), ('\u{1EA6}', '\u{1EA7}'), ('\u{1EA8}', '\u{1EA9}'),
    ('\u{1EAA}', '\u{1EAB}'), ('\u{1EAC}', '\u{1EAD}'), ('\u{1EAE}', '\u{1EAF}'),
    ('\u{1EB0}', '\u{1EB1}'), ('\u{1EB2}', '\u{1EB3}'), ('\u{1EB4}', '\u{1EB5}'),
    ('\u{1EB6}', '\u{1EB7}'), ('\u{1EB8}', '\u{1EB9}'), ('\u{1EBA}', '\u{1EBB}'),
    ('\u{1EBC}', '\u{1EBD}'), ('\u{1EBE}', '\u{1EBF}'), ('\u{1EC0}', '\u{1EC1}'),
    ('\u{1EC2}', '\u{1EC3}'), ('\u{1EC4}', '\u{1EC5}'), ('\u{1EC6}', '\u{1EC7}'),
    ('\u{1EC8}', '\u{1EC9}'), ('\u{1ECA}', '\u{1ECB}'), ('\u{1ECC}', '\u{1ECD}'),
    ('\u{1ECE}', '\u{1ECF}'), ('\u{1ED0}', '\u{1ED1}'), ('\u{1ED2}', '\u{1ED3}'),
    ('\u{1ED4}', '\u{1ED5}'), ('\u{1ED6}', '\u{1ED7}'), ('\u{1ED8}', '\u{1ED9}'),
    ('\u{1EDA}', '\u{1EDB}'), ('\u{1EDC}', '\u{1EDD}'), ('\u{1EDE}', '\u{1EDF}'),
    ('\u{1EE0}', '\u{1EE1}'), ('\u{1EE2}', '\u{1EE3}'), ('\u{1EE4}', '\u{1EE5}'),
    ('\u{1EE6}', '\u{1EE7}'), ('\u{1EE8}', '\u{1EE9}'), ('\u{1EEA}', '\u{1EEB}'),
    ('\u{1EEC}', '\u{1EED}'), ('\u{1EEE}', '\u{1EEF}'), ('\u{1EF0}', '\u{1EF1}'),
    ('\u{1EF2}', '\u{1EF3}'), ('\u{1EF4}', '\u{1EF5}'), ('\u{1EF6}', '\u{1EF7}'),
    ('\u{1EF8}', '\u{1EF9}'), ('\u{1F08}', '\u{1F00}'), ('\u{1F09}', '\u{1F01}'),
    ('\u{1F0A}', '\u{1F02}'), ('\u{1F0B}', '\u{1F03}'), ('\u{1F0C}', '\u{1F04}'),
    ('\u{1F0D}', '\u{1F05}'), ('\u{1F0E}', '\u{1F06}'), ('\u{1F0F}', '\u{1F07}'),
    ('\u{1F18}', '\u{1F10}'), ('\u{1F19}', '\u{1F11}'), ('\u{1F1A}', '\u{1F12}'),
    ('\u{1F1B}', '\u{1F13}'), ('\u{1F1C}', '\u{1F14}'), ('\u{1F1D}', '\u{1F15}'),
    ('\u{1F28}', '\u{1F20}'), ('\u{1F29}', '\u{1F21}'), ('\u{1F2A}', '\u{1F22}'),
    ('\u{1F2B}', '\u{1F23}'), ('\u{1F2C}', '\u{1F24}'), ('\u{1F2D}', '\u{1F25}'),
    ('\u{1F2E}', '\u{1F26}'), ('\u{1F2F}', '\u{1F27}'), ('\u{1F38}', '\u{1F30}'),
    ('\u{1F39}', '\u{1F31}'), ('\u{1F3A}', '\u{1F32}'), ('\u{1F3B}', '\u{1F33}'),
    ('\u{1F3C}', '\u{1F34}'), ('\u{1F3D}', '\u{1F35}'), ('\u{1F3E}', '\u{1F36}'),
    ('\u{1F3F}', '\u{1F37}'), ('\u{1F48}', '\u{1F40}'), ('\u{1F49}', '\u{1F41}'),
    ('\u{1F4A}', '\u{1F42}'), ('\u{1F4B}', '\u{1F43}'), ('\u{1F4C}', '\u{1F44}'),
    ('\u{1F4D}', '\u{1F45}'), ('\u{1F59}', '\u{1F51}'), ('\u{1F5B}', '\u{1F53}'),
    ('\u{1F5D}', '\u{1F55}'), ('\u{1F5F}', '\u{1F57}'), ('\u{1F68}', '\u{1F60}'),
    ('\u{1F69}', '\u{1F61}'), ('\u{1F6A}', '\u{1F62}'), ('\u{1F6B}', '\u{1F63}'),
    ('\u{1F6C}', '\u{1F64}'), ('\u{1F6D}', '\u{1F65}'), ('\u{1F6E}', '\u{1F66}'),
    ('\u{1F6F}', '\u{1F67}'), ('\u{1F88}', '\u{1F80}'), ('\u{1F89}', '\u{1F81}'),
    ('\u{1F8A}', '\u{1F82}'), ('\u{1F8B}', '\u{1F83}'), ('\u{1F8C}', '\u{1F84}'),
    ('\u{1F8D}', '\u{1F85}'), ('\u{1F8E}', '\u{1F86}'), ('\u{1F8F}', '\u{1F87}'),
    ('\u{1F98}', '\u{1F90}'), ('\u{1F99}', '\u{1F91}'), ('\u{1F9A}', '\u{1F92}'),
    ('\u{1F9B}', '\u{1F93}'), ('\u{1F9C}', '\u{1F94}'), ('\u{1F9D}', '\u{1F95}'),
    ('\u{1F9E}', '\u{1F96}'), ('\u{1F9F}', '\u{1F97}'), ('\u{1FA8}', '\u{1FA0}'),
    ('\u{1FA9}', '\u{1FA1}'), ('\u{1FAA}', '\u{1FA2}'), ('\u{1FAB}', '\u{1FA3}'),
    ('\u{1FAC}', '\u{1FA4}'), ('\u{1FAD}', '\u{1FA5}'), ('\u{1FAE}', '\u{1FA6}'),
    ('\u{1FAF}', '\u{1FA7}'), ('\u{1FB8}', '\u{1FB0}'), ('\u{1FB9}', '\u{1FB1}'),
    ('\u{1FD8}', '\u{1FD0}'), ('\u{1FD9}', '\u{1FD1}'), ('\u{1FE8}', '\u{1FE0}'),
    ('\u{1FE9}', '\u{1FE1}'), ('\u{24B6}', '\u{24D0}'), ('\u{24B7}', '\u{24D1}'),
    ('\u{24B8}', '\u{24D2}'), ('\u{24B9}', '\u{24D3}'), ('\u{24BA}', '\u{24D4}'),
    ('\u{24BB}', '\u{24D5}'), ('\u{24BC}', '\u{24D6}'), ('\u{24BD}', '\u{24D7}'),
    ('\u{24BE}', '\u{24D8}'), ('\u{24BF}', '\u{24D9}'), ('\u{24C0}', '\u{24DA}'),
    ('\u{24C1}', '\u{24DB}'), ('\u{24C2}', '\u{24DC}'), ('\u{24C3}', '\u{24DD}'),
    ('\u{24C4}', '\u{24DE}'), ('\u{24C5}', '\u{24DF}'), ('\u{24C6}', '\u{24E0}'),
    ('\u{24C7}', '\u{24E1}'), ('\u{24C8}', '\u{24E2}'), ('\u{24C9}', '\u{24E3}'),
    ('\u{24CA}', '\u{24E4}'), ('\u{24CB}', '\u{24E5}'), ('\u{24CC}', '\u{24E6}'),
    ('\u{24CD}', '\u{24E7}'), ('\u{24CE}', '\u{24E8}'), ('\u{24CF}', '\u{24E9}'),
    ('\u{FF21}', '\u{FF41}'), ('\u{FF22}', '\u{FF42}'), ('\u{FF23}', '\u{FF43}'),
    ('\u{FF24}', '\u{FF44}'), ('\u{FF25}', '\u{FF45}'), ('\u{FF26}', '\u{FF46}'),
    ('\u{FF27}', '\u{FF47}'), ('\u{FF28}', '\u{FF48}'), ('\u{FF29}', '\u{FF49}'),
    ('\u{FF2A}', '\u{FF4A}'), ('\u{FF2B}', '\u{FF4B}'), ('\u{FF2C}', '\u{FF4C}'),
    ('\u{FF2D}', '\u{FF4D}'), ('\u{FF2E}', '\u{FF4E}'), ('\u{FF2F}', '\u{FF4F}'),
    ('\u{FF30}', '\u{FF50}'), ('\u{FF31}', '\u{FF51}'), ('\u{FF32}', '\u{FF52}'),
    ('\u{FF33}', '\u{FF53}'), ('\u{FF34}', '\u{FF54}'), ('\u{FF35}', '\u{FF55}'),
    ('\u{FF36}', '\u{FF56}'), ('\u{FF37}', '\u{FF57}'), ('\u{FF38}', '\u{FF58}'),
    ('\u{FF39}', '\u{FF59}'), ('\u{FF3A}', '\u{FF5A}'),
];
