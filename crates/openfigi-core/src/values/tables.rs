//! Accepted values per field, as served by `GET /v3/mapping/values/{key}`.
//!
//! Generated by `openfigi generate-values`. Refresh with
//! `openfigi generate-values > crates/openfigi-core/src/values/tables.rs`
//! rather than editing by hand.

/// `idType`
pub(super) const ID_TYPES: &[&str] = &[
    "BASE_TICKER",
    "COMPOSITE_ID_BB_GLOBAL",
    "ID_AUSTRIAN",
    "ID_BB",
    "ID_BB_CONNECT",
    "ID_BB_GLOBAL",
    "ID_BB_GLOBAL_SHARE_CLASS_LEVEL",
    "ID_BB_SEC_NUM_DES",
    "ID_BB_UNIQUE",
    "ID_BELGIUM",
    "ID_CEDEL",
    "ID_CINS",
    "ID_COMMON",
    "ID_CUSIP",
    "ID_CUSIP_8_CHR",
    "ID_DENMARK",
    "ID_EUROCLEAR",
    "ID_EXCH_SYMBOL",
    "ID_FRANCE",
    "ID_FULL_EXCHANGE_SYMBOL",
    "ID_ISIN",
    "ID_ITALY",
    "ID_JAPAN",
    "ID_LUXEMBOURG",
    "ID_MISC_DOMESTIC",
    "ID_NETHERLANDS",
    "ID_POLAND",
    "ID_PORTUGAL",
    "ID_PRIVATE_PLACEMENT",
    "ID_SEDOL",
    "ID_SHORT_CODE",
    "ID_SWEDEN",
    "ID_WERTPAPIER",
    "ID_XTRAKTER",
    "OCC_SYMBOL",
    "OPRA_SYMBOL",
    "TICKER",
    "TRADING_SYSTEM_IDENTIFIER",
    "UNIQUE_ID_FUT_OPT",
    "VENDOR_INDEX_CODE",
];

/// `exchCode`
pub(super) const EXCH_CODES: &[&str] = &[
    "A0",
    "AB",
    "AC",
    "AD",
    "AF",
    "AG",
    "AH",
    "AI",
    "AL",
    "AM",
    "AN",
    "AO",
    "AR",
    "AS",
    "AT",
    "AU",
    "AV",
    "AW",
    "AY",
    "AZ",
    "BA",
    "BB",
    "BC",
    "BD",
    "BG",
    "BH",
    "BI",
    "BK",
    "BM",
    "BN",
    "BO",
    "BQ",
    "BR",
    "BS",
    "BT",
    "BU",
    "BV",
    "BW",
    "BY",
    "BZ",
    "CB",
    "CD",
    "CE",
    "CF",
    "CG",
    "CH",
    "CI",
    "CJ",
    "CK",
    "CL",
    "CM",
    "CN",
    "CO",
    "CP",
    "CR",
    "CS",
    "CT",
    "CU",
    "CV",
    "CX",
    "CY",
    "CZ",
    "DB",
    "DC",
    "DD",
    "DE",
    "DF",
    "DG",
    "DH",
    "DI",
    "DM",
    "DQ",
    "DS",
    "DT",
    "DU",
    "DX",
    "EB",
    "EC",
    "ED",
    "EE",
    "EF",
    "EG",
    "EI",
    "EK",
    "EL",
    "EO",
    "EP",
    "EQ",
    "ES",
    "ET",
    "EU",
    "EY",
    "EZ",
    "FH",
    "FM",
    "FP",
    "FS",
    "GA",
    "GB",
    "GC",
    "GD",
    "GF",
    "GH",
    "GI",
    "GK",
    "GL",
    "GN",
    "GR",
    "GS",
    "GT",
    "GU",
    "GY",
    "HB",
    "HD",
    "HK",
    "HN",
    "HO",
    "HR",
    "HS",
    "HU",
    "IA",
    "IB",
    "IC",
    "ID",
    "IE",
    "IG",
    "IH",
    "II",
    "IJ",
    "IK",
    "IL",
    "IM",
    "IN",
    "IO",
    "IQ",
    "IR",
    "IS",
    "IT",
    "IX",
    "IY",
    "JA",
    "JB",
    "JC",
    "JF",
    "JG",
    "JI",
    "JJ",
    "JN",
    "JO",
    "JP",
    "JQ",
    "JS",
    "JT",
    "JU",
    "JW",
    "JX",
    "KB",
    "KE",
    "KF",
    "KH",
    "KK",
    "KN",
    "KP",
    "KQ",
    "KS",
    "KY",
    "KZ",
    "LB",
    "LC",
    "LD",
    "LE",
    "LF",
    "LG",
    "LH",
    "LI",
    "LJ",
    "LK",
    "LN",
    "LO",
    "LR",
    "LS",
    "LU",
    "LV",
    "LX",
    "LY",
    "MB",
    "MC",
    "MD",
    "ME",
    "MF",
    "MG",
    "MI",
    "MJ",
    "MK",
    "ML",
    "MM",
    "MN",
    "MO",
    "MP",
    "MQ",
    "MS",
    "MT",
    "MV",
    "MW",
    "MX",
    "MZ",
    "NA",
    "NC",
    "NE",
    "NG",
    "NK",
    "NL",
    "NM",
    "NO",
    "NQ",
    "NR",
    "NS",
    "NT",
    "NW",
    "NX",
    "NZ",
    "OM",
    "PA",
    "PB",
    "PD",
    "PE",
    "PF",
    "PG",
    "PL",
    "PM",
    "PN",
    "PO",
    "PP",
    "PQ",
    "PS",
    "PW",
    "PX",
    "PY",
    "PZ",
    "QB",
    "QD",
    "QE",
    "QF",
    "QH",
    "QI",
    "QM",
    "QP",
    "QS",
    "QT",
    "QW",
    "QX",
    "RB",
    "RC",
    "RE",
    "RF",
    "RI",
    "RM",
    "RN",
    "RO",
    "RP",
    "RQ",
    "RR",
    "RS",
    "RT",
    "RU",
    "RW",
    "RX",
    "RZ",
    "SA",
    "SB",
    "SC",
    "SD",
    "SE",
    "SF",
    "SG",
    "SH",
    "SI",
    "SJ",
    "SK",
    "SL",
    "SM",
    "SN",
    "SO",
    "SP",
    "SR",
    "SS",
    "ST",
    "SV",
    "SW",
    "SX",
    "SY",
    "SZ",
    "TA",
    "TB",
    "TE",
    "TG",
    "TH",
    "TI",
    "TL",
    "TN",
    "TP",
    "TQ",
    "TR",
    "TT",
    "TU",
    "TW",
    "TX",
    "TZ",
    "UA",
    "UB",
    "UC",
    "UD",
    "UE",
    "UF",
    "UG",
    "UH",
    "UI",
    "UJ",
    "UK",
    "UL",
    "UM",
    "UN",
    "UO",
    "UP",
    "UQ",
    "UR",
    "US",
    "UT",
    "UU",
    "UV",
    "UW",
    "UX",
    "UY",
    "UZ",
    "VA",
    "VB",
    "VC",
    "VE",
    "VF",
    "VH",
    "VI",
    "VJ",
    "VK",
    "VL",
    "VM",
    "VN",
    "VO",
    "VR",
    "VS",
    "VU",
    "VX",
    "VY",
    "WU",
    "XA",
    "XB",
    "XC",
    "XD",
    "XE",
    "XF",
    "XG",
    "XH",
    "XJ",
    "XL",
    "XM",
    "XN",
    "XO",
    "XP",
    "XQ",
    "XR",
    "XS",
    "XT",
    "XU",
    "XV",
    "XW",
    "XX",
    "XY",
    "XZ",
    "YB",
    "YC",
    "YD",
    "YE",
    "YF",
    "YG",
    "YH",
    "YN",
    "YR",
    "YS",
    "YU",
    "ZA",
    "ZB",
    "ZC",
    "ZH",
    "ZL",
    "ZM",
    "ZP",
    "ZQ",
    "ZR",
    "ZS",
    "ZT",
    "ZU",
    "ZV",
    "ZW",
];

/// `micCode`
pub(super) const MIC_CODES: &[&str] = &[
    "360T",
    "AATS",
    "ADRK",
    "AFET",
    "ALXB",
    "ALXL",
    "ALXP",
    "AMTS",
    "AQEU",
    "AQXA",
    "AQXE",
    "ARCD",
    "ARCO",
    "ARCX",
    "ASEX",
    "BAAD",
    "BAPE",
    "BARK",
    "BATE",
    "BATF",
    "BATO",
    "BATP",
    "BATS",
    "BATY",
    "BBSI",
    "BCXE",
    "BEUP",
    "BGCI",
    "BGCO",
    "BIDS",
    "BLOX",
    "BLPX",
    "BMEX",
    "BMTF",
    "BNDS",
    "BOTC",
    "BOTE",
    "BOVA",
    "BTEC",
    "BTFE",
    "BTNL",
    "BURM",
    "BVCA",
    "BVMF",
    "BVRD",
    "BYXD",
    "CBSX",
    "CCRM",
    "CDED",
    "CEUX",
    "CHIA",
    "CHIC",
    "CHID",
    "CHIJ",
    "CHIX",
    "CMES",
    "CNSI",
    "CSGM",
    "CXAC",
    "CXAF",
    "CXAN",
    "CXAP",
    "CXAQ",
    "CXAR",
    "CXAV",
    "CXAW",
    "DBIX",
    "DHEL",
    "DNDK",
    "DOTS",
    "DSTO",
    "EBSM",
    "EDGA",
    "EDGD",
    "EDGO",
    "EDGX",
    "EEUX",
    "EPRL",
    "ERIS",
    "ETFP",
    "ETLX",
    "EUCC",
    "EURM",
    "EUWX",
    "EXMP",
    "FNDK",
    "FNSE",
    "FSSI",
    "GEMX",
    "GMNI",
    "GRSE",
    "HCHC",
    "HMOD",
    "HSTC",
    "IEXG",
    "IFEU",
    "IFLL",
    "IFUS",
    "IMCO",
    "IMTS",
    "INCR",
    "ISBA",
    "ISDX",
    "ISE2",
    "IST2",
    "JADX",
    "JASR",
    "JPNL",
    "KABU",
    "LCUR",
    "LMAD",
    "LMAE",
    "LOTC",
    "LTSE",
    "MCRY",
    "MEMX",
    "MERD",
    "MESQ",
    "MIAX",
    "MMTF",
    "MOTX",
    "MPRL",
    "MSAX",
    "MTAA",
    "MTAH",
    "MTCH",
    "MUBL",
    "NAVI",
    "NEOE",
    "NEXT",
    "NODX",
    "NOTC",
    "NXUS",
    "OMIC",
    "OPEX",
    "OTCB",
    "OTCM",
    "OTCQ",
    "PINC",
    "PINX",
    "PSGM",
    "PURE",
    "RCBX",
    "ROCO",
    "SBIJ",
    "SEDX",
    "SEPX",
    "SGMX",
    "SGMY",
    "SGMZ",
    "SHSC",
    "SIGX",
    "SMFE",
    "SPEC",
    "SZSC",
    "TGAT",
    "THEM",
    "TOMX",
    "TQEX",
    "TRQX",
    "TSXV",
    "TWEM",
    "UBSX",
    "VPXB",
    "WBAH",
    "XADE",
    "XADF",
    "XADS",
    "XAMS",
    "XAPI",
    "XARM",
    "XASE",
    "XASX",
    "XATH",
    "XBAH",
    "XBAR",
    "XBDA",
    "XBEL",
    "XBER",
    "XBEY",
    "XBKK",
    "XBLB",
    "XBOG",
    "XBOL",
    "XBOM",
    "XBOS",
    "XBOT",
    "XBRA",
    "XBRN",
    "XBRU",
    "XBSD",
    "XBSE",
    "XBUD",
    "XBUE",
    "XBUL",
    "XCAI",
    "XCAS",
    "XCBF",
    "XCBO",
    "XCBT",
    "XCHG",
    "XCHI",
    "XCIS",
    "XCME",
    "XCNQ",
    "XCOL",
    "XCSE",
    "XCYS",
    "XDAR",
    "XDES",
    "XDFM",
    "XDHA",
    "XDSE",
    "XDUB",
    "XDUS",
    "XECS",
    "XEEE",
    "XEQT",
    "XETR",
    "XEUC",
    "XEUE",
    "XEUM",
    "XEUR",
    "XFKA",
    "XFRA",
    "XGAT",
    "XGHA",
    "XGSE",
    "XGUA",
    "XHAM",
    "XHAN",
    "XHEL",
    "XHKF",
    "XHKG",
    "XHNX",
    "XHSC",
    "XIDX",
    "XIEX",
    "XIQS",
    "XISE",
    "XIST",
    "XJAM",
    "XJPX",
    "XJSE",
    "XKAR",
    "XKAZ",
    "XKFE",
    "XKHA",
    "XKLS",
    "XKON",
    "XKOS",
    "XKRX",
    "XKSE",
    "XKUW",
    "XLIM",
    "XLIS",
    "XLIT",
    "XLJU",
    "XLON",
    "XLUX",
    "XMAD",
    "XMAL",
    "XMAU",
    "XMEV",
    "XMEX",
    "XMGE",
    "XMIL",
    "XMNX",
    "XMOD",
    "XMOL",
    "XMON",
    "XMSM",
    "XMUN",
    "XNAI",
    "XNAM",
    "XNAS",
    "XNCM",
    "XNEC",
    "XNEP",
    "XNGM",
    "XNGO",
    "XNGS",
    "XNKS",
    "XNMS",
    "XNSA",
    "XNSE",
    "XNYM",
    "XNYS",
    "XNZE",
    "XOSE",
    "XOSL",
    "XOTC",
    "XPAE",
    "XPAR",
    "XPHL",
    "XPHS",
    "XPOR",
    "XPOS",
    "XPRA",
    "XPSX",
    "XPTY",
    "XQMH",
    "XQUI",
    "XRIS",
    "XSAP",
    "XSAT",
    "XSAU",
    "XSCA",
    "XSCO",
    "XSEC",
    "XSES",
    "XSGO",
    "XSHE",
    "XSHG",
    "XSSC",
    "XSTC",
    "XSTO",
    "XSTU",
    "XSWA",
    "XSWX",
    "XTAE",
    "XTAI",
    "XTAL",
    "XTEH",
    "XTFF",
    "XTKS",
    "XTRN",
    "XTSE",
    "XTSX",
    "XTUN",
    "XUGA",
    "XULA",
    "XVTX",
    "XWAR",
    "XWBO",
    "XZAG",
    "XZAM",
    "XZIM",
];

/// `currency`
pub(super) const CURRENCIES: &[&str] = &[
    "AED",
    "AFN",
    "ALL",
    "AMD",
    "ANG",
    "AOA",
    "ARS",
    "AUD",
    "AWG",
    "AZN",
    "BAM",
    "BBD",
    "BDT",
    "BGN",
    "BHD",
    "BIF",
    "BMD",
    "BND",
    "BOB",
    "BRL",
    "BSD",
    "BTN",
    "BWP",
    "BYN",
    "BYR",
    "BZD",
    "CAD",
    "CDF",
    "CHF",
    "CLF",
    "CLP",
    "CNH",
    "CNY",
    "COP",
    "CRC",
    "CUC",
    "CUP",
    "CVE",
    "CZK",
    "DJF",
    "DKK",
    "DOP",
    "DZD",
    "EGP",
    "ERN",
    "ETB",
    "EUR",
    "FJD",
    "FKP",
    "GBP",
    "GBp",
    "GEL",
    "GHS",
    "GIP",
    "GMD",
    "GNF",
    "GTQ",
    "GYD",
    "HKD",
    "HNL",
    "HRK",
    "HTG",
    "HUF",
    "IDR",
    "ILS",
    "ILs",
    "INR",
    "IQD",
    "IRR",
    "ISK",
    "JMD",
    "JOD",
    "JPY",
    "KES",
    "KGS",
    "KHR",
    "KMF",
    "KPW",
    "KRW",
    "KWD",
    "KWd",
    "KYD",
    "KZT",
    "LAK",
    "LBP",
    "LKR",
    "LRD",
    "LSL",
    "LTL",
    "LVL",
    "LYD",
    "MAD",
    "MDL",
    "MGA",
    "MKD",
    "MMK",
    "MNT",
    "MOP",
    "MRO",
    "MRU",
    "MUR",
    "MVR",
    "MWK",
    "MXN",
    "MYR",
    "MZN",
    "NAD",
    "NGN",
    "NIO",
    "NOK",
    "NPR",
    "NZD",
    "OMR",
    "PAB",
    "PEN",
    "PGK",
    "PHP",
    "PKR",
    "PLN",
    "PYG",
    "QAR",
    "RON",
    "RSD",
    "RUB",
    "RWF",
    "SAR",
    "SBD",
    "SCR",
    "SDG",
    "SEK",
    "SGD",
    "SHP",
    "SLE",
    "SLL",
    "SOS",
    "SRD",
    "SSP",
    "STD",
    "STN",
    "SVC",
    "SYP",
    "SZL",
    "THB",
    "TJS",
    "TMT",
    "TND",
    "TOP",
    "TRY",
    "TTD",
    "TWD",
    "TZS",
    "UAH",
    "UGX",
    "USD",
    "USd",
    "UYU",
    "UZS",
    "VEF",
    "VES",
    "VND",
    "VUV",
    "WST",
    "XAF",
    "XAG",
    "XAU",
    "XCD",
    "XDR",
    "XOF",
    "XPD",
    "XPF",
    "XPT",
    "YER",
    "ZAR",
    "ZAr",
    "ZMW",
    "ZWL",
];

/// `marketSecDes`
pub(super) const MARKET_SEC_DES: &[&str] = &[
    "Comdty",
    "Corp",
    "Curncy",
    "Equity",
    "Govt",
    "Index",
    "M-Mkt",
    "Mtge",
    "Muni",
    "Pfd",
];

/// `securityType`
pub(super) const SECURITY_TYPES: &[&str] = &[
    "ABS Auto",
    "ABS Card",
    "ABS Home",
    "ABS Other",
    "ADJ CONV. TO FIXED",
    "ADJ CONV. TO FIXED, OID",
    "ADJUSTABLE",
    "ADJUSTABLE, OID",
    "ADR",
    "ARM",
    "Agncy CMBS",
    "Agncy CMO",
    "Agncy CMO FLT",
    "Agncy CMO INV",
    "Agncy CMO IO",
    "Agncy CMO Other",
    "Agncy CMO PO",
    "Agncy CMO Z",
    "Agncy CMO Z Other",
    "Agncy Debenture",
    "Austrian Crt",
    "BANK ACCEPTANCE",
    "BANK NOTE",
    "BANKERS ACCEPTANCE",
    "BASIS SWAP",
    "BDR",
    "BILL",
    "BUTTERFLY SWAP",
    "Belgium Cert",
    "Bond",
    "CAL RESTRICT",
    "CAPS & FLOORS",
    "CASH",
    "CASH FLOW",
    "CASH RATE",
    "CBLO",
    "CD",
    "CDI",
    "CDR",
    "CF",
    "CMBS",
    "CMO",
    "COMMERCIAL PAPER",
    "CONTRACT FOR DIFFERENCE",
    "CONV/ADJ",
    "CONV/ADJ, OID",
    "CONVERTIBLE",
    "Closed-End Fund",
    "Common Stock",
    "Conv Bond",
    "Conv Prfd",
    "Crypto",
    "Currency future.",
    "Currency option.",
    "Currency spot.",
    "DEBENTURE",
    "DEPOSIT",
    "DEPOSIT NOTE",
    "DISCOUNT NOTES",
    "DOMESTIC",
    "DOMESTIC MTN",
    "DUTCH CERT",
    "Dutch Cert",
    "EDR",
    "ETP",
    "EURO CD",
    "EURO CP",
    "EURO MTN",
    "EURO NON-DOLLAR",
    "EURO STRUCTRD LN",
    "EURO TIME DEPST",
    "EURO-DOLLAR",
    "EURO-ZONE",
    "Equity Index",
    "Equity Option",
    "Equity WRT",
    "FHLMC",
    "FIXED",
    "FLOATING",
    "FNMA",
    "FORWARD",
    "FORWARD CROSS",
    "FRA",
    "FUTURE",
    "FX Discount Note",
    "Financial commodity future.",
    "Financial commodity generic.",
    "Financial commodity option.",
    "Financial commodity spot.",
    "Financial index future.",
    "Financial index generic.",
    "Financial index option.",
    "Fund of Funds",
    "GDR",
    "GLOBAL",
    "GNMA",
    "Generic currency future.",
    "Generic index future.",
    "HB",
    "Hedge Fund",
    "IDR",
    "INDEX",
    "Index",
    "Index Option",
    "Int. Rt. Swaption",
    "Ltd Part",
    "MBS",
    "MED TERM NOTE",
    "MIS",
    "MLP",
    "MONEY MARKET CALL",
    "MUNI",
    "MV",
    "Misc.",
    "Mutual Fund",
    "NON-US GOVT",
    "NY Reg Shrs",
    "OPTION",
    "OPTION VOLATILITY",
    "OVER/NIGHT",
    "OVERNIGHT INDEXED SWAP",
    "Open-End Fund",
    "Option",
    "PRIV PLACEMENT",
    "Pfd WRT",
    "Physical commodity forward.",
    "Physical commodity future.",
    "Physical commodity generic.",
    "Physical commodity option.",
    "Physical commodity spot.",
    "Physical index future.",
    "Physical index generic.",
    "Physical index option.",
    "Pool",
    "Preference",
    "Prfd WRT",
    "Private Comp",
    "Private-equity backed",
    "Prvt CMBS",
    "Prvt CMO",
    "Prvt CMO FLT",
    "Prvt CMO INV",
    "Prvt CMO IO",
    "Prvt CMO Other",
    "Prvt CMO PO",
    "Prvt CMO Z",
    "Publicly Traded Fund",
    "REIT",
    "REPO",
    "RESTRUCTURING",
    "Receipt",
    "Right",
    "Royalty Trst",
    "SAVINGS PLAN",
    "SBA Pool",
    "SDR",
    "SN",
    "SPOT",
    "STRIP",
    "STRUCTURED NOTE",
    "SWAP",
    "SWAP SPREAD",
    "Savings Share",
    "Sing St Fut",
    "Singapore Dollar",
    "Stapled Security",
    "Swiss Cert",
    "TAX CREDIT",
    "TBA",
    "TERM",
    "TERM DEPOSIT",
    "TREASURY BILL",
    "Tracking Stk",
    "UK GILT STOCK",
    "US CD",
    "US DOMESTIC",
    "US GOVERNMENT",
    "US INFLATION LINKED",
    "Unit",
    "Unit Inv Tr",
    "VAR RATE DEM OBL",
    "WHEN ISSUED",
    "Warrant",
    "YANKEE",
    "YANKEE CD",
    "ZERO COUPON",
    "ZERO COUPON, OID",
];

/// `securityType2`
pub(super) const SECURITY_TYPES_2: &[&str] = &[
    "ABS Auto",
    "ABS Card",
    "ABS Home",
    "ABS Other",
    "BDC",
    "Basis",
    "Bill",
    "CDO",
    "CDS",
    "CMBS",
    "CMO",
    "Commodity",
    "Common Stock",
    "Corp",
    "Currency",
    "Depositary Receipt",
    "Forward",
    "Future",
    "Generic",
    "Govt",
    "Index",
    "LOAN",
    "MMKT",
    "MTN",
    "Mutual Fund",
    "Note",
    "Option",
    "Partnership Shares",
    "Pool",
    "Preferred Stock",
    "Right",
    "SWAP",
    "Spot",
    "Unit",
    "Warrant",
    "Whole Loan",
];

/// `stateCode`
pub(super) const STATE_CODES: &[&str] = &[
    "AA",
    "AB",
    "AC",
    "AE",
    "AK",
    "AL",
    "AP",
    "AR",
    "AS",
    "AZ",
    "BC",
    "CA",
    "CO",
    "CT",
    "CZ",
    "DC",
    "DE",
    "FL",
    "FM",
    "GA",
    "GU",
    "HI",
    "IA",
    "ID",
    "IL",
    "IN",
    "KS",
    "KY",
    "LA",
    "MA",
    "MB",
    "MD",
    "ME",
    "MH",
    "MI",
    "MN",
    "MO",
    "MP",
    "MS",
    "MT",
    "NB",
    "NC",
    "ND",
    "NE",
    "NF",
    "NH",
    "NJ",
    "NL",
    "NM",
    "NS",
    "NT",
    "NU",
    "NV",
    "NY",
    "OH",
    "OK",
    "ON",
    "OR",
    "PA",
    "PE",
    "PQ",
    "PR",
    "PW",
    "QC",
    "RI",
    "SC",
    "SD",
    "SK",
    "SN",
    "TN",
    "TX",
    "UT",
    "VA",
    "VI",
    "VT",
    "WA",
    "WI",
    "WV",
    "WY",
    "YT",
];
