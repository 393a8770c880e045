//! Static icosahedron geometry: face centers, axis azimuths, and the
//! face adjacency/orientation tables used when coordinates spill over a
//! face edge.

use crate::constants::{MAX_RESOLUTION, NUM_ICOSA_FACES};
use crate::coords::ijk::CoordIJK;
use crate::math::Vec3d;
use crate::types::LatLng;

/// Table index for the ij quadrant of a face.
pub(crate) const IJ_QUADRANT: usize = 1;
/// Table index for the ki quadrant of a face.
pub(crate) const KI_QUADRANT: usize = 2;
/// Table index for the jk quadrant of a face.
pub(crate) const JK_QUADRANT: usize = 3;

/// How to re-express coordinates in an adjacent face's IJK system.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceOrient {
  /// The adjacent face number.
  pub face: i32,
  /// Resolution-0 translation relative to the primary face.
  pub translate: CoordIJK,
  /// 60-degree ccw rotations relative to the primary face.
  pub rot60: i32,
}

/// Maximum IJK+ coordinate dimension on a face, by Class II resolution.
/// Class III resolutions use the next finer Class II entry.
#[rustfmt::skip]
pub(crate) static MAX_DIM_BY_CII_RES: [i32; (MAX_RESOLUTION + 2) as usize] = [
  2, -1, 14, -1, 98, -1, 686, -1, 4802, -1, 33614, -1,
  235_298, -1, 1_647_086, -1, 11_529_602,
];

/// Resolution-0 unit length expressed in units of the given Class II
/// resolution.
#[rustfmt::skip]
pub(crate) static UNIT_SCALE_BY_CII_RES: [i32; (MAX_RESOLUTION + 2) as usize] = [
  1, -1, 7, -1, 49, -1, 343, -1, 2401, -1, 16807, -1,
  117_649, -1, 823_543, -1, 5_764_801,
];

/// Direction from an origin face to a destination face, expressed as a
/// quadrant of the origin face's coordinate system, or -1 when the faces
/// are not adjacent.
#[rustfmt::skip]
pub(crate) static ADJACENT_FACE_DIR: [[i32; NUM_ICOSA_FACES as usize]; NUM_ICOSA_FACES as usize] = {
  const IJ: i32 = IJ_QUADRANT as i32;
  const KI: i32 = KI_QUADRANT as i32;
  const JK: i32 = JK_QUADRANT as i32;
  [
    [ 0, KI, -1, -1, IJ, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // face 0
    [IJ,  0, KI, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // face 1
    [-1, IJ,  0, KI, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // face 2
    [-1, -1, IJ,  0, KI, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // face 3
    [KI, -1, -1, IJ,  0, -1, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // face 4
    [JK, -1, -1, -1, -1,  0, -1, -1, -1, -1, IJ, -1, -1, -1, KI, -1, -1, -1, -1, -1], // face 5
    [-1, JK, -1, -1, -1, -1,  0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1, -1, -1, -1], // face 6
    [-1, -1, JK, -1, -1, -1, -1,  0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1, -1, -1], // face 7
    [-1, -1, -1, JK, -1, -1, -1, -1,  0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1, -1], // face 8
    [-1, -1, -1, -1, JK, -1, -1, -1, -1,  0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1], // face 9
    [-1, -1, -1, -1, -1, IJ, KI, -1, -1, -1,  0, -1, -1, -1, -1, JK, -1, -1, -1, -1], // face 10
    [-1, -1, -1, -1, -1, -1, IJ, KI, -1, -1, -1,  0, -1, -1, -1, -1, JK, -1, -1, -1], // face 11
    [-1, -1, -1, -1, -1, -1, -1, IJ, KI, -1, -1, -1,  0, -1, -1, -1, -1, JK, -1, -1], // face 12
    [-1, -1, -1, -1, -1, -1, -1, -1, IJ, KI, -1, -1, -1,  0, -1, -1, -1, -1, JK, -1], // face 13
    [-1, -1, -1, -1, -1, KI, -1, -1, -1, IJ, -1, -1, -1, -1,  0, -1, -1, -1, -1, JK], // face 14
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, -1,  0, IJ, -1, -1, KI], // face 15
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, KI,  0, IJ, -1, -1], // face 16
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, KI,  0, IJ, -1], // face 17
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, KI,  0, IJ], // face 18
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, IJ, -1, -1, KI,  0], // face 19
  ]
};

/// Icosahedron face centers in latitude/longitude radians.
#[rustfmt::skip]
pub(crate) static FACE_CENTER_GEO: [LatLng; NUM_ICOSA_FACES as usize] = [
  LatLng { lat: 0.803_582_649_718_989_94, lng: 1.248_397_419_617_396 },    // face 0
  LatLng { lat: 1.307_747_883_455_638_2, lng: 2.536_945_009_877_921 },    // face 1
  LatLng { lat: 1.054_751_253_523_952, lng: -1.347_517_358_900_396_6 },  // face 2
  LatLng { lat: 0.600_191_595_538_186_8, lng: -0.450_603_909_469_755_75 }, // face 3
  LatLng { lat: 0.491_715_428_198_773_87, lng: 0.401_988_202_911_306_94 },  // face 4
  LatLng { lat: 0.172_745_327_415_618_7, lng: 1.678_146_885_280_433_7 },   // face 5
  LatLng { lat: 0.605_929_321_571_350_7, lng: 2.953_923_329_812_411_6 },   // face 6
  LatLng { lat: 0.427_370_518_328_979_64, lng: -1.888_876_200_336_285_4 },  // face 7
  LatLng { lat: -0.079_066_118_549_212_83, lng: -0.733_429_513_380_867_74 }, // face 8
  LatLng { lat: -0.230_961_644_455_383_64, lng: 0.506_495_587_332_349 },    // face 9
  LatLng { lat: 0.079_066_118_549_212_83, lng: 2.408_163_140_208_925_5 },   // face 10
  LatLng { lat: 0.230_961_644_455_383_64, lng: -2.635_097_066_257_444 },   // face 11
  LatLng { lat: -0.172_745_327_415_618_7, lng: -1.463_445_768_309_359_5 },  // face 12
  LatLng { lat: -0.605_929_321_571_350_7, lng: -0.187_669_323_777_381_62 }, // face 13
  LatLng { lat: -0.427_370_518_328_979_64, lng: 1.252_716_453_253_508 },    // face 14
  LatLng { lat: -0.600_191_595_538_186_8, lng: 2.690_988_744_120_037_5 },   // face 15
  LatLng { lat: -0.491_715_428_198_773_87, lng: -2.739_604_450_678_486_3 },  // face 16
  LatLng { lat: -0.803_582_649_718_989_94, lng: -1.893_195_233_972_397 },   // face 17
  LatLng { lat: -1.307_747_883_455_638_2, lng: -0.604_647_643_711_872_1 },  // face 18
  LatLng { lat: -1.054_751_253_523_952, lng: 1.794_075_294_689_396_6 },   // face 19
];

/// Icosahedron face centers as unit-sphere x/y/z points.
#[rustfmt::skip]
pub(crate) static FACE_CENTER_POINT: [Vec3d; NUM_ICOSA_FACES as usize] = [
  Vec3d { x: 0.219_930_779_140_460_6, y: 0.658_369_178_027_499_6, z: 0.719_847_537_892_618_2 },    // face 0
  Vec3d { x: -0.213_923_483_450_142_1, y: 0.147_817_182_955_070_3, z: 0.965_601_793_521_420_5 },   // face 1
  Vec3d { x: 0.109_262_527_878_479_7, y: -0.481_195_157_287_321, z: 0.869_777_512_128_725_3 },    // face 2
  Vec3d { x: 0.742_856_730_158_679_1, y: -0.359_394_167_827_802_8, z: 0.564_800_593_651_703_3 },   // face 3
  Vec3d { x: 0.811_253_470_914_096_9, y: 0.344_895_323_763_938_4, z: 0.472_138_773_641_393 },     // face 4
  Vec3d { x: -0.105_549_814_961_392_1, y: 0.979_445_729_641_141_3, z: 0.171_887_461_000_936_5 },   // face 5
  Vec3d { x: -0.807_540_757_997_009_2, y: 0.153_355_248_589_881_8, z: 0.569_526_199_488_268_8 },   // face 6
  Vec3d { x: -0.284_614_806_978_790_7, y: -0.864_408_097_265_420_6, z: 0.414_479_255_247_354 },    // face 7
  Vec3d { x: 0.740_562_147_385_448_2, y: -0.667_329_956_456_552_4, z: -0.078_983_764_632_673_77 }, // face 8
  Vec3d { x: 0.851_230_398_647_429_3, y: 0.472_234_378_858_268_1, z: -0.228_913_738_868_780_8 },  // face 9
  Vec3d { x: -0.740_562_147_385_448_1, y: 0.667_329_956_456_552_4, z: 0.078_983_764_632_673_77 },  // face 10
  Vec3d { x: -0.851_230_398_647_429_2, y: -0.472_234_378_858_268_2, z: 0.228_913_738_868_780_8 }, // face 11
  Vec3d { x: 0.105_549_814_961_391_9, y: -0.979_445_729_641_141_3, z: -0.171_887_461_000_936_5 },  // face 12
  Vec3d { x: 0.807_540_757_997_009_2, y: -0.153_355_248_589_881_9, z: -0.569_526_199_488_268_8 }, // face 13
  Vec3d { x: 0.284_614_806_978_790_8, y: 0.864_408_097_265_420_4, z: -0.414_479_255_247_354 },    // face 14
  Vec3d { x: -0.742_856_730_158_679_1, y: 0.359_394_167_827_802_7, z: -0.564_800_593_651_703_3 },  // face 15
  Vec3d { x: -0.811_253_470_914_097_1, y: -0.344_895_323_763_938_2, z: -0.472_138_773_641_393 },   // face 16
  Vec3d { x: -0.219_930_779_140_460_7, y: -0.658_369_178_027_499_6, z: -0.719_847_537_892_618_2 }, // face 17
  Vec3d { x: 0.213_923_483_450_142, y: -0.147_817_182_955_070_4, z: -0.965_601_793_521_420_5 },   // face 18
  Vec3d { x: -0.109_262_527_878_479_6, y: 0.481_195_157_287_321, z: -0.869_777_512_128_725_3 },  // face 19
];

/// Face IJK axes as azimuths in radians from the face center to each of
/// vertices 0, 1 and 2.
#[rustfmt::skip]
pub(crate) static FACE_AXES_AZ_RADS_CII: [[f64; 3]; NUM_ICOSA_FACES as usize] = [
  [5.619_958_268_523_94, 3.525_563_166_130_744_5, 1.431_168_063_737_548_7], // face 0
  [5.760_339_081_714_187, 3.665_943_979_320_991_7, 1.571_548_876_927_796], // face 1
  [0.780_213_654_393_430_1, 4.969_003_859_179_821, 2.874_608_756_786_625_7], // face 2
  [0.430_469_363_979_999_9, 4.619_259_568_766_391, 2.524_864_466_373_195_5], // face 3
  [6.130_269_123_335_111, 4.035_874_020_941_916, 1.941_478_918_548_720_3], // face 4
  [2.692_877_706_530_643, 0.598_482_604_137_447_1, 4.787_272_808_923_838],   // face 5
  [2.982_963_003_477_244, 0.888_567_901_084_048_4, 5.077_358_105_870_44],    // face 6
  [3.532_912_002_790_141, 1.438_516_900_396_945_7, 5.627_307_105_183_337],   // face 7
  [3.494_305_004_259_568, 1.399_909_901_866_372_9, 5.588_700_106_652_764],   // face 8
  [3.003_214_169_499_538_4, 0.908_819_067_106_342_9, 5.097_609_271_892_734],   // face 9
  [5.930_472_956_509_811_6, 3.836_077_854_116_616, 1.741_682_751_723_420_4], // face 10
  [0.138_378_484_090_254_85, 4.327_168_688_876_646, 2.232_773_586_483_45],    // face 11
  [0.448_714_947_059_150_36, 4.637_505_151_845_541_5, 2.543_110_049_452_346],   // face 12
  [0.158_629_650_112_549_36, 4.347_419_854_898_94, 2.253_024_752_505_745],   // face 13
  [5.891_865_957_979_238_5, 3.797_470_855_586_043, 1.703_075_753_192_847_6], // face 14
  [2.711_123_289_609_793_3, 0.616_728_187_216_597_8, 4.805_518_392_002_988_7], // face 15
  [3.294_508_837_434_268, 1.200_113_735_041_073, 5.388_903_939_827_464],   // face 16
  [3.804_819_692_245_44, 1.710_424_589_852_244_5, 5.899_214_794_638_635],   // face 17
  [3.664_438_879_055_192_4, 1.570_043_776_661_997, 5.758_833_981_448_388],   // face 18
  [2.361_378_999_196_363, 0.266_983_896_803_167_6, 4.455_774_101_589_558_6], // face 19
];

/// Adjacent face orientation for each face: the central entry plus the
/// ij, ki and jk quadrant neighbors, in table order.
#[rustfmt::skip]
pub(crate) static FACE_NEIGHBORS: [[FaceOrient; 4]; NUM_ICOSA_FACES as usize] = [
  // face 0
  [ FaceOrient { face: 0, translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },  // central face
    FaceOrient { face: 4, translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 1 },  // ij quadrant (index 1)
    FaceOrient { face: 1, translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 5 },  // ki quadrant (index 2)
    FaceOrient { face: 5, translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],// jk quadrant (index 3)
  // face 1
  [ FaceOrient { face: 1, translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 0, translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 1 },
    FaceOrient { face: 2, translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 5 },
    FaceOrient { face: 6, translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 2
  [ FaceOrient { face: 2, translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 1, translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 1 },
    FaceOrient { face: 3, translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 5 },
    FaceOrient { face: 7, translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 3
  [ FaceOrient { face: 3, translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 2, translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 1 },
    FaceOrient { face: 4, translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 5 },
    FaceOrient { face: 8, translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 4
  [ FaceOrient { face: 4, translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 3, translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 1 },
    FaceOrient { face: 0, translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 5 },
    FaceOrient { face: 9, translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 5
  [ FaceOrient { face: 5, translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 10,translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 3 },
    FaceOrient { face: 14,translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 3 },
    FaceOrient { face: 0, translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 6
  [ FaceOrient { face: 6, translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 11,translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 3 },
    FaceOrient { face: 10,translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 3 },
    FaceOrient { face: 1, translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 7
  [ FaceOrient { face: 7, translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 12,translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 3 },
    FaceOrient { face: 11,translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 3 },
    FaceOrient { face: 2, translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 8
  [ FaceOrient { face: 8, translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 13,translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 3 },
    FaceOrient { face: 12,translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 3 },
    FaceOrient { face: 3, translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 9
  [ FaceOrient { face: 9, translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 14,translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 3 },
    FaceOrient { face: 13,translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 3 },
    FaceOrient { face: 4, translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 10
  [ FaceOrient { face: 10,translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 5, translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 3 },
    FaceOrient { face: 6, translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 3 },
    FaceOrient { face: 15,translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 11
  [ FaceOrient { face: 11,translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 6, translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 3 },
    FaceOrient { face: 7, translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 3 },
    FaceOrient { face: 16,translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 12
  [ FaceOrient { face: 12,translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 7, translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 3 },
    FaceOrient { face: 8, translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 3 },
    FaceOrient { face: 17,translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 13
  [ FaceOrient { face: 13,translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 8, translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 3 },
    FaceOrient { face: 9, translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 3 },
    FaceOrient { face: 18,translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 14
  [ FaceOrient { face: 14,translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 9, translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 3 },
    FaceOrient { face: 5, translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 3 },
    FaceOrient { face: 19,translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 15
  [ FaceOrient { face: 15,translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 16,translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 1 },
    FaceOrient { face: 19,translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 5 },
    FaceOrient { face: 10,translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 16
  [ FaceOrient { face: 16,translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 17,translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 1 },
    FaceOrient { face: 15,translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 5 },
    FaceOrient { face: 11,translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 17
  [ FaceOrient { face: 17,translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 18,translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 1 },
    FaceOrient { face: 16,translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 5 },
    FaceOrient { face: 12,translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 18
  [ FaceOrient { face: 18,translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 19,translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 1 },
    FaceOrient { face: 17,translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 5 },
    FaceOrient { face: 13,translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
  // face 19
  [ FaceOrient { face: 19,translate: CoordIJK { i: 0, j: 0, k: 0 }, rot60: 0 },
    FaceOrient { face: 15,translate: CoordIJK { i: 2, j: 0, k: 2 }, rot60: 1 },
    FaceOrient { face: 18,translate: CoordIJK { i: 2, j: 2, k: 0 }, rot60: 5 },
    FaceOrient { face: 14,translate: CoordIJK { i: 0, j: 2, k: 2 }, rot60: 3 } ],
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn face_centers_are_unit_vectors() {
    for f in 0..NUM_ICOSA_FACES as usize {
      let p = &FACE_CENTER_POINT[f];
      let norm = p.x * p.x + p.y * p.y + p.z * p.z;
      assert!((norm - 1.0).abs() < 1e-12, "face {f}");
      let from_geo = Vec3d::from_latlng(&FACE_CENTER_GEO[f]);
      assert!(from_geo.square_dist(p) < 1e-12, "face {f} geo/xyz agreement");
    }
  }

  #[test]
  fn adjacency_matches_neighbor_table() {
    for f in 0..NUM_ICOSA_FACES as usize {
      assert_eq!(ADJACENT_FACE_DIR[f][f], 0);
      for quadrant in [IJ_QUADRANT, KI_QUADRANT, JK_QUADRANT] {
        let neighbor = FACE_NEIGHBORS[f][quadrant].face as usize;
        assert_eq!(
          ADJACENT_FACE_DIR[f][neighbor], quadrant as i32,
          "face {f} quadrant {quadrant}"
        );
      }
      let adjacent = (0..NUM_ICOSA_FACES as usize)
        .filter(|&t| ADJACENT_FACE_DIR[f][t] > 0)
        .count();
      assert_eq!(adjacent, 3, "face {f} has exactly three neighbors");
    }
  }

  #[test]
  fn scale_tables_step_by_aperture() {
    for res in (2..=(MAX_RESOLUTION + 1) as usize).step_by(2) {
      assert_eq!(UNIT_SCALE_BY_CII_RES[res], UNIT_SCALE_BY_CII_RES[res - 2] * 7);
      assert_eq!(MAX_DIM_BY_CII_RES[res], MAX_DIM_BY_CII_RES[res - 2] * 7);
    }
  }
}
