// SPDX‑License‑Identifier: MIT
//! Published constant tables for the width-4 Poseidon permutation over the
//! BLS12-377 scalar field, already folded into the optimized round schedule.
//!
//! The raw parameters are the Grain LFSR round constants for
//! `n = 253, t = 4, R_F = 8, R_P = 56` and the Cauchy matrix `M[i][j] = 1/(i + t + j)`.
//! Round constants are moved past the linear layer and the partial-round matrices
//! are factored into the dense transition matrix `P` and one sparse row per
//! partial round.

use ark_ff::{BigInteger, MontFp, PrimeField};
use digest::Digest;
use once_cell::sync::Lazy;
use sha3::Sha3_256;
use tracing::{debug, error};

use crate::{ConfigError, FULL_ROUNDS, Fr, PARTIAL_ROUNDS, SPONGE_WIDTH};

/// Entries of [`ROUND_CONSTANTS`] consumed by one permutation.
pub const NUM_ROUND_CONSTANTS: usize = FULL_ROUNDS * SPONGE_WIDTH + PARTIAL_ROUNDS;
/// Sparse coefficients per partial round: `SPONGE_WIDTH` for the new lane 0 plus
/// `SPONGE_WIDTH - 1` for the lane updates.
pub const SPARSE_ROW_LEN: usize = SPONGE_WIDTH * 2 - 1;
pub const NUM_SPARSE_CONSTANTS: usize = SPARSE_ROW_LEN * PARTIAL_ROUNDS;

//  ---------------------------------------------------------------------------
//  Tables
//  ---------------------------------------------------------------------------

/// Additive constants, indexed by the offsets in [`crate::permutation`].
pub static ROUND_CONSTANTS: &[Fr] = &[
    MontFp!("2652789701482442146822976153577650366341774136808945353695538699088354408276"),
    MontFp!("2044164608422180691455395357869082912622712032074338779249077270555927704967"),
    MontFp!("1987415418510963105860200477159580772308877200479054237441131604584739181111"),
    MontFp!("2852634214691568279785089129363152479843744249734475406905606008423055645687"),
    MontFp!("7534085864177923912222312430522173479594491577730015515597557818990324659594"),
    MontFp!("1384871636448982920735674783773662757251727373438317881410074782181301306712"),
    MontFp!("4157542015538752690273529775689237804503399837978649237951350014286809955944"),
    MontFp!("6536256831180312176502881453480585350191847664954853598560959456677813210810"),
    MontFp!("5076244390894215946244084451981676066640017769982779807235455181150556893845"),
    MontFp!("5163165599698258948118539313906866592273152341048510197095263392819371358155"),
    MontFp!("3765952719461659383318666392771411494772919397122465767018868160787221390533"),
    MontFp!("3441791473550676999013525587827905813604029161770897039321404238844609447737"),
    MontFp!("3576689156174997623987373719485710237450179278670921846843951818408165907146"),
    MontFp!("2007718564701926187460905783877070882976876927176516266074911889846947882914"),
    MontFp!("7481791821433021183844664086022807415909065096395993825150795435523739385179"),
    MontFp!("3798034174113330805083354750066512836310383274385535912314582220755361201864"),
    MontFp!("7987324781862093903200591926165956679149323022861787223624542993715927465562"),
    MontFp!("4801332528634043027026480473197405981118138097208086540467922965703197948921"),
    MontFp!("184430335418533789073676866516361300943346959805723766513524042896431549705"),
    MontFp!("2708537166157461569337827434586417098752585091053003876400495497484495001725"),
    MontFp!("7914064439369842170160724028893260340580655636487317107720988508868120654461"),
    MontFp!("5717722683421004298538721470136321942557378257189046296957180998969012623520"),
    MontFp!("8070728202065664930698436008999263276218995257403932124394661076735844081001"),
    MontFp!("1537124633237449157016381525297015431285020141195015570700688348645085083720"),
    MontFp!("2747247746887767078590576990063845748224729612509297764100582439593124603150"),
    MontFp!("295383610199777475505247937026960067311677604692610166862107838962749773026"),
    MontFp!("7278952634620024649604366529875452067892762525400765988161962928572239414112"),
    MontFp!("2580198645821626621674003735250473878129400940562087341926484946687966334093"),
    MontFp!("739748194393240364800985348102800585150694635459313900354325529261599108632"),
    MontFp!("5050887571968977017490453621667482721233611787429639769364987308532933851520"),
    MontFp!("1657322963405091787975821040118702651825139215941360392476250820781566952924"),
    MontFp!("3344218590287660641037436053669082416694300761074706604044423280101121203398"),
    MontFp!("6204305547469070868988850518612753324043233377892116571175360995176538259267"),
    MontFp!("733694232388066483300434167378628632303887863348635112116713368226659272823"),
    MontFp!("6240046620647357500618009662783274706581217402391319245999728499385813534631"),
    MontFp!("6920366127763836386338891787663380236083803559567052724110156762404867430329"),
    MontFp!("3751453188408707692900595309750703065253702682901906671559423130739480822085"),
    MontFp!("8166560115444769477265007089463684746705242676784169650781372555195597169470"),
    MontFp!("217859752936741025682664621018889517189742400612554909231949683135451897371"),
    MontFp!("6445551849594556919375986818417102084764050075738242646933823111598582177701"),
    MontFp!("363750790952132301043883575601354209667430301100148307025067217571222846008"),
    MontFp!("196370607783927893670077620244295112696276924115648831025268764857328473300"),
    MontFp!("7869984968850616860385804283645114922157484838327165651944362463117469335202"),
    MontFp!("1426688131308830207681393150920835901659171280787617458916545118453576564901"),
    MontFp!("7854218133720182433603596715307559110677930140158691252795704057652040012906"),
    MontFp!("3913121146799338338291165757407054087893054640002848359477217983303272632880"),
    MontFp!("1019514481906326793369274304088070349496715600481631732489126221210279863492"),
    MontFp!("7627774189584677768223526453861408595545653668107776045628795587363611706949"),
    MontFp!("7856524426683497551115334962604115725291061994740670247266297302107451669412"),
    MontFp!("2923777711600077963494629953463077660303772236127951400888940768421231175016"),
    MontFp!("201576330687363519876937683867738969953839537479073487712090248927739332404"),
    MontFp!("880392421095041262163136769542287465448413248444067389080104857181168022988"),
    MontFp!("7796881239182530546572084473863313956481613569173736913961871563801872435727"),
    MontFp!("3782195662811030876646832872372432014961796304626005899403815358816081940691"),
    MontFp!("3258443702749513575595000198861584362746066459965323308944881430436834439292"),
    MontFp!("5915029781767842612726537204901113952969824830825492684534085171139503083933"),
    MontFp!("4332141503098080894219922740525991345004624459658149987339612091612664793245"),
    MontFp!("5780940417379056917619708712798260936787892381056845545463757716030554193068"),
    MontFp!("5294852546193709031988095369750495019819469185006444125304801042295167814904"),
    MontFp!("1305302310760370754844751358506143614861465666894054096484912039542504576901"),
    MontFp!("3964232304445853773024662004188048427807367018336537848481353556494745179298"),
    MontFp!("2937962528188352403806464795372707970139866934750615739410552029968804151004"),
    MontFp!("6750408449677965504166923820048261473572169534019104645777943666493032827707"),
    MontFp!("3862026513569009596840549930759128546120973185096257068656480392667729305377"),
    MontFp!("878381857399255067480308063519915863610448586354265754346373224205586042140"),
    MontFp!("3860131674996413179332273597668858409515169844582667724325355350727425120508"),
    MontFp!("7559969144595566389227426675625714189288169799324827387320442520660685135821"),
    MontFp!("8302336628638886118140744978259606669877523656394370753538429234509275318373"),
    MontFp!("6247736682591409121066525604911265726004154019138178675216065984750832032488"),
    MontFp!("6989100452176012913806871387710710639860634343501645800492133604135608323015"),
    MontFp!("748484433579572731686810573925641753962939645180271507617515585672374763567"),
    MontFp!("683484389694545745497298712144771272303584149623519593346193983066410405828"),
    MontFp!("7757953581483901932689599165039482017753698872059862273791115391654360806785"),
    MontFp!("8100999707453691128905998103682204287746224673202809349964344337488724988058"),
    MontFp!("6032723917782503918490284175764635537492571118030297569066275009884846111335"),
    MontFp!("3088743938015908868921775889594435581875288643984000195246988271842485984655"),
    MontFp!("4806308672883589524500737545439060071440182421981061259718379431756379497469"),
    MontFp!("1721963368840972811216857160444780540408259421585844090250590268145936393625"),
    MontFp!("8372041781255356946961971180689357039064119013122822519692193081170189889062"),
    MontFp!("4026553314074840961387819848019686956394734648697423421763073929404478121795"),
    MontFp!("1499965780202220044890385572511250812767786515687898583913130682048623364450"),
    MontFp!("814493526009601844357052647755258436544034131002303967874782268377976452010"),
    MontFp!("4377965120317141628415983871573205237251789797931258768347997247181771083849"),
    MontFp!("8182514169226161460978397258286091000764236300646763161304150187514047656761"),
    MontFp!("3858652966349907859386361490515307948762013761770116448943078039983811215060"),
    MontFp!("135251938861228142002210711116903694379614801618445089296688674606905798736"),
    MontFp!("2011462218418248883561330047225079089154709806740772275054401429593019081426"),
    MontFp!("1421683344988616448075023862627775323237318099342578298993039387654070708831"),
];

/// Sparse partial-round rows, [`SPARSE_ROW_LEN`] entries per round.
pub static SPARSE_CONSTANTS: &[Fr] = &[
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("8258007600045318547248181622133366108105828594076485713807571028922058639303"),
    MontFp!("7903653555220300065294735437512912289563275770526504685650990677023298155847"),
    MontFp!("1727747667059191842410577306642076567387048426579587893450704774135369158000"),
    MontFp!("4156286163305204083040050430778062955093246251933502836943633159315398675542"),
    MontFp!("3084621751178984446629406766321340413368810988619886348983231579380970231322"),
    MontFp!("6672078481222910697811007328380878840465180311735068513118051055195282446063"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("8149978976625375924997130671118659400477422406438023521557772491394641355805"),
    MontFp!("3415201747522706189321638312841487208881869845872697836871660122637367977690"),
    MontFp!("4077040691462204804516356925922400494556051401109618428016945941678549000025"),
    MontFp!("431757684095473799355870431933458141525380419943012744793700103380988826266"),
    MontFp!("2214861762847336029481563814658405370293525416392219271414001343246907247676"),
    MontFp!("6016308238407749019346527257042058463016959450655572741059844203683283908044"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("7130987940490815271679290731715092185076906071096115817444884022558036881765"),
    MontFp!("6232908556527646094528132628128171094311599059135262393309189571071268678520"),
    MontFp!("5441728221953019313663592020995403587622336248648458690787603907182999378253"),
    MontFp!("601411849093704714148273174962531076662537219704933145164317413885443072394"),
    MontFp!("4424141505919104015697139051089643022349112553858396227358469698795576106590"),
    MontFp!("2421424000214181667137578366909391593802140910854060454255250403768038147428"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("497220128732994466496628772374003386153484158033466074865068326618422929526"),
    MontFp!("8300181918660190227017715912465096024242728916156718301094878150569136110235"),
    MontFp!("5576246924276310218508777685580632948243294563288132230811723395934470951601"),
    MontFp!("5101933216318782035219147105655583256468866393376563026212994215468453506651"),
    MontFp!("7693724699758795490208160653021869759824680883661160663845606308410964121704"),
    MontFp!("5300577989225724771225281729242184605591506004484747658988394015927188981748"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("910083442405804441605891638145328655644871132163772177279198080353175027596"),
    MontFp!("3386870736304066726442457526643090962377343870675933599702989812124079194098"),
    MontFp!("7500056544911515599162706839963471106813480497681332438937484835492381603367"),
    MontFp!("6851127364663751446551438898073430606831256501700572511321331054515308036394"),
    MontFp!("5466173983906295362069602102685694664785034322417946879986947510898066613626"),
    MontFp!("6936180859214962533726667950270196080826770423072804613432299020881768589306"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("2226466810978397433912116156850573711940966823839993085342467370316268661960"),
    MontFp!("3698884428921694673930453267291242454658000796606727853930460292963137769824"),
    MontFp!("4242560344177971791121306842180517621834759357196264527064285673711139345345"),
    MontFp!("2351907968153408307251680929661097443364878464086344335832117288535090996604"),
    MontFp!("4080993919424028146336319641408199163573562293434708190647383081112118440588"),
    MontFp!("8405894863995932103696943015666684123599174479716924592445939398325098699392"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("7210245032223308373369240728883777404838675358511429584314416547490516772337"),
    MontFp!("6479346774817717008666106117449486282768315035860639057090614057725207359286"),
    MontFp!("7212329474701886017412013578198961799354024174822752558986401183819125053234"),
    MontFp!("7741635608435725096936167074314683129774747560386618876423027737493342582739"),
    MontFp!("784164984497080445608937592427766980599948523918095152187724401209813205244"),
    MontFp!("4782073797125893773319687681548381409408409064550847115804709904934491119697"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("6346336773386249387073809632912462541542656754109651084008441867058869536565"),
    MontFp!("2071657222691141660672941925276823189801256447354918975834895249699770555748"),
    MontFp!("4477013271472242117727043432616757760167846395444663316787194427922373032766"),
    MontFp!("3742887646795643060137379377610910873039673148923634638621085736488827845882"),
    MontFp!("6157413374817823768723996530167877230531496608917835186025921847865936168902"),
    MontFp!("7683215401015102171710805267412848668086733008089783569516982002718282669643"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("204302275117588528226340119610547848899813933099333602827422641402504523348"),
    MontFp!("2936393827127685697078045163563637172425631329555287242439219932088690761204"),
    MontFp!("509447193767956715803363476600815593169723359232839778535472560328421115984"),
    MontFp!("4021710236224095866876418766456543018587447298375588057682189011109749308553"),
    MontFp!("3940902795442541598114049473244440239152906893824709492309137736174891135384"),
    MontFp!("4796477356118775016873689283156404200869648784619366685537282591713864720758"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("3734153920160117462523845454555111531976379107320583065683386769494105593196"),
    MontFp!("7087774743139188168721699135642076759178496074966633768130127376635423580937"),
    MontFp!("6876835825786876640319177444962100955864930937796070417672789617088023455971"),
    MontFp!("3207054541281607407017059132450118823160606625529603993120902535018049251479"),
    MontFp!("3996472301931673058248430409035827331120682003459077721314965156380642238554"),
    MontFp!("3626468169591085431076473582806679242375177386033470904896994275849716112247"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("3349001819533514950350721442181210572751049757116143453096937126753152215423"),
    MontFp!("591801252217593677550435488109225395194980643108975769557997842016632389156"),
    MontFp!("7196315104814042629571300514406569852070599632397945614374083944537000580254"),
    MontFp!("4322490736202122553559075003316818980187430989905276567365270063356163411724"),
    MontFp!("4938895400519956682443385869053513317399809093309169093892596436150390479329"),
    MontFp!("6608436165239648306659185688791206053904587607822783617804395903762835794025"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("5060775122983580308270510170315128152449431395089337863175168407779661299344"),
    MontFp!("3295561148213092925753543454947134266847058066111873334425732378876520444941"),
    MontFp!("7326247200949505931281416699897621252625688272322561631611791773284258270942"),
    MontFp!("4762342581094999563354802254385545363768629379530042671510332358463914052903"),
    MontFp!("3166745535083012440140530015893536630392844004702862814717217639632858158222"),
    MontFp!("81847231151128894354242656538623854409936577141841307514933354509300014739"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("2330567176901493120565873382517666369290504315703978226874049920605186007310"),
    MontFp!("7126199771862661566989278196829609829622847532587598254800953853991576030993"),
    MontFp!("6610417415494633590756114678680394947652273819275423978245735933817222210396"),
    MontFp!("346343074644379289586355007981871065289840244667933340807560516018257093450"),
    MontFp!("1750234319206396244135089143598924755772718447011060207766259299388379901526"),
    MontFp!("8292710710087362277477457296655232048233705304362059523101811599320067446652"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("4042286096325918605133471651683507519531622546977047320336459221999591856978"),
    MontFp!("232450867938159743622581077883214726571359935798135497801237804403400743333"),
    MontFp!("1603421584156417332852118358017456440917258491647705085140570815191144321413"),
    MontFp!("56926688077158974257402113979154612572674212077995918744913069786763919914"),
    MontFp!("1930327093101770719397595946215931915657177020419313329347811125874001347265"),
    MontFp!("6118395406269045621201982313490347394292791684196299486550400099947880902582"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("454967434821851100966275078486119228937365500492427436030865782960878199010"),
    MontFp!("4755591362981851913897862510650911027396283962899632054393304246754989944810"),
    MontFp!("8244557692771552854351964885048257895605106399068940236076099720328901760665"),
    MontFp!("2012853518473645221709636700493464510683611484151744451691854273625854349432"),
    MontFp!("7104510804369828855985193676684797979245089191048856843884172583583462339087"),
    MontFp!("5736856940569503137794384611690841826962951375897355169807746299683128104048"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("1936561771922999987944893689616614633747571318507673059260162728212401862731"),
    MontFp!("6300383641486185256601221845478385998435209874125869538728170481797372025513"),
    MontFp!("1644294120889769397495988511687401544315487860433797232153369596095704645895"),
    MontFp!("5228789707233065706169750348367316140547362110768806388208104911151089775376"),
    MontFp!("3739610305304096169718391627194935224643881341838563725757336284874173911778"),
    MontFp!("4455150963062851379855987235102723520794835176032709322299679817334068279635"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("272264841138958829824875790203609142359265442010726121556375238005914082349"),
    MontFp!("7295412260526893808951409685460649515554782415034507793832965142365221363468"),
    MontFp!("285552923661169842174210565042431737370139418175290376654506323732747246470"),
    MontFp!("4592869503746309579918308067800620606968015506606349623764763325794995463312"),
    MontFp!("3559711403740755743841449318607687650781922780442871476883592890640163087025"),
    MontFp!("6706982026472441249675404894107206954894309281619086236969407062327615351490"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("218509581617322605351844806812975436186791369559740877752857742100031148227"),
    MontFp!("4802663261051375622225828858657241198762403293263668820685359926951662524070"),
    MontFp!("4039862915824891725811218736262846434192860196644366826539372876689178156633"),
    MontFp!("8202087835667854801930429505518452165645762241064161154511012711029821230665"),
    MontFp!("8008647563706602364612922475398129451126618034337211445712326897054592807935"),
    MontFp!("7807519867347498518478068627297070038820792579170845026404804822153857748974"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("1981465678715871014815711397272500440906049949659782482439785638540920551208"),
    MontFp!("4397889335308918992921142125586123096140294891778773133172151861498805531330"),
    MontFp!("5585926364505332271766912661384168558030269109625785756069309471803077601008"),
    MontFp!("202273333347358707381184234880091625582494996089270073456790730274442713273"),
    MontFp!("749437940898331189602471946202250022429679446176319653917868416228552848715"),
    MontFp!("7791975514643494502290255013019301754755432554444040022293487415785028557435"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("3667341111209554993583366033202537902538143456556360230353038569640941115289"),
    MontFp!("1755049097011932310468629231053823538921697287161476582079812829120747500238"),
    MontFp!("2045549039051307696508677643754297224387506972436942963191941777134893153731"),
    MontFp!("189894852931625547235871268453615155689491300412535258542858502002586556537"),
    MontFp!("7951506082366411403204559148491525139383817304420027288988780335528792342947"),
    MontFp!("4341074791729904122285232597276379111172322270475602143041289535945962532730"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("7400720106790343332912897013937478478210201279707662530587711590228292871085"),
    MontFp!("4019959201789040363720829529475110565894697078209800364840095662193010616925"),
    MontFp!("1772794687551279974305592245899728227701929644750649193370731270989742677929"),
    MontFp!("2501263635413804104356319167624925958372609141232169034325453492365279527254"),
    MontFp!("5962967473214038034908087786025133898290313628963335236472900935186063137050"),
    MontFp!("2226485779921698363360647756628950576646820831849755626332819591214821376191"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("6402357407570902907267418047235362452278584109565577057760529093896569376367"),
    MontFp!("768179636286135092092407420124412602148076205154991496364729044624792064375"),
    MontFp!("4621877418900249081059752596219343794340997835642896002474757657024458196099"),
    MontFp!("1322399500819600653085104281370803157846305918971685172968090913949421706331"),
    MontFp!("448714785468985640048309496449777042763495120025217249060067115531482385213"),
    MontFp!("4866341613981274395636041634609568312216624209060093164390502845936689519380"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("3212209138173693432257001256850280477419144162259075122572261861423913346033"),
    MontFp!("703197540014990710071883909239626116954491405132815597221222250050260915521"),
    MontFp!("7000933715235506315757911146224491403045352763866456294653598637609203961611"),
    MontFp!("4601023564737213189182650582209320976713050076499497491740466198170427824926"),
    MontFp!("2160755425330993816257291174976223750446238704520811154821599363127276462425"),
    MontFp!("1572945922270415162226642372867763172768017333409697511726314372559943963259"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("6185554449678614733517726799946172780098540931410507118756160410185643917179"),
    MontFp!("2547774799069265350217539725188375109331928064382517863869074249531298600977"),
    MontFp!("5847663374175388262909003825026269767820771696393950368809004673465506439943"),
    MontFp!("839903585235775258439978707898213701407412952257747804759248975682267797228"),
    MontFp!("7329440306654329639946722399600819561936501779702117072334833187800294461366"),
    MontFp!("5597483650495914013248000462161559917505249684644208744504797468894343346866"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("7001522859052968247719895257085568566276332504517212959004387005004247187680"),
    MontFp!("1600539594108373341738399151592738057703037976365883732556490053827669436408"),
    MontFp!("2508949745548533222719249876224932535500465335999044749470883318203634149985"),
    MontFp!("2170895537844960790090383006440394083247278527256091316505755523655995770156"),
    MontFp!("752945555893772153675434622747779310843734507904228828542503537378346345071"),
    MontFp!("4572660996010204347817646074083254770036930779383135131624453437087734906876"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("5881153929590226273974020024739366539228093085910895296970187642591692093565"),
    MontFp!("3087526099159687808661739667166920879776388348863148098514933760593102720940"),
    MontFp!("5526153939329367714443368714325933485322875317171130645740974552496562203691"),
    MontFp!("4173866183335783201472244194628736576783485048837628675393061737465983108384"),
    MontFp!("7722932000723324455226456664260648291221473306287563441845985456906430570292"),
    MontFp!("6594856426287953808893617720912378172793949803669275719479745212507719610277"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("6384532249021946732997709377988002515308046142422082092943922461917913306657"),
    MontFp!("3515611156196107654971290045026105822551599443335223195522444955784753391799"),
    MontFp!("1138224488543914315238990105003526271580692633890115486567474932377669162114"),
    MontFp!("6000226279124146863136727241256982816131788444179224115247746928098400722618"),
    MontFp!("7908282303686056666698544594350069550453591878182541881359237112975862129485"),
    MontFp!("5093308510117892085703642542483202569453525014619454757347106210972466294020"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("7438767407235580483497807493395600990773278262780472362485131520399115235980"),
    MontFp!("5080296968760900376797434832877005601939022285199363417189940949817304923085"),
    MontFp!("6251905300474441622357928415759826694411515968555428464483715738282960204848"),
    MontFp!("2619961646306645205581391052995726359765715683944281254302206143737916690178"),
    MontFp!("4232098761091596546204817900511023602320071513319772077757088132146331349971"),
    MontFp!("5893996741813770214517823932256109521211578999954946896591904115585491695052"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("7170328928050700797526727006832484628166126803784878349848814523758718583922"),
    MontFp!("7301555459845197983545694905439043755630987774458330557496046097688240447729"),
    MontFp!("7092363593810921014374819556963677484202399019871535414564199487898138079427"),
    MontFp!("8325580809316750396675932766762467417898539258649549722222651695036898066623"),
    MontFp!("935876647201484443045783718082846974724768327063500795021021311129223445135"),
    MontFp!("5974524863800626848947952172784466077450257164992828220213582810876839558473"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("2772827049081756680166514702658410840311990125977382881464127786096434083869"),
    MontFp!("731236289407407592668021529780874110544277150581068361116404642724426427086"),
    MontFp!("4715581558270174759234469054378631966663443657525350772513895993669197306864"),
    MontFp!("8204349001314703297214711404623509303225403466275829075672617857385903588067"),
    MontFp!("7700899516069850752036253589356545985942429317687927116121979635283175537543"),
    MontFp!("5044294933436925340418900271847539180520545900803250015351447337961276236452"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("6986747642722807193008824234701113994769851278733429354827786822556898831972"),
    MontFp!("7277802966896614056540208748248219131616055447869084105405369407240413141926"),
    MontFp!("5379666108398667768550501311321582195912476073271010508490754949821202384893"),
    MontFp!("2524955224785662198329591589711724674124095555557836743499679504608493658905"),
    MontFp!("4302967459015373152759829425128086104313538230989566310193577282421857243983"),
    MontFp!("7085854677712207318166853710193042340041941540033918378974225578285392933819"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("4836923819677594097895695170713226141965257370018415181146945568645162458969"),
    MontFp!("2338024011441608123521841904929188790818612008008323734889422354188603144855"),
    MontFp!("2970573662451252164418849682611292619683787341167928072175166200243325985059"),
    MontFp!("4840022052693157642279807806490641258088748396347667260846692256128474823366"),
    MontFp!("2320513981783688370977023477088348323530328530115618603961392545350193826810"),
    MontFp!("5464621915894148975838316947465227562970124896240483310384384958637202783418"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("5381857409779952665628327584043375540976057604310147612953286182936555841786"),
    MontFp!("5585801386783953702819984194280591127472653787134009001003784777239879575973"),
    MontFp!("7518256439684693117324139182952967700924072572444328723655399151441539099139"),
    MontFp!("3883396810313782286826526743921122893928006622029825695950975537821087389160"),
    MontFp!("3247903860075715841700417346976305520144095625429508014463116597838387896518"),
    MontFp!("7713976443013667920827122604772376124752037463132917973907825978429262179301"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("2684994569877741008293622266647277205103897185526103072687389663167680974490"),
    MontFp!("4530823401126709833726476391654984444257531769309813676261832238601758040157"),
    MontFp!("7346447850308101906027715432789199716019579461200364616077795555030472476421"),
    MontFp!("7772327947818743993969536799424541943794222077485149388704018051197958237416"),
    MontFp!("6091861936708362479115449153105710361288418563209566341998459726848412047463"),
    MontFp!("5297480874990195902272064724091045043992902989341028640068973757227255598679"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("6788207622832042348642126488920616088822687435613155564625070055136494404543"),
    MontFp!("7345572074363256210583967430006583646430507990591113801668207894210689527725"),
    MontFp!("5186047010312854035204413482828045021134916673161128169450645601608316659505"),
    MontFp!("1040329738684054638944033836258206193595141362098686106182885767432151997470"),
    MontFp!("6410948495872817231121367331641167551943622914451951024109227826536706053475"),
    MontFp!("8427589653022398096841334561198668589334175018792376810561267438739330852416"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("1170257694699101461637358453390078380415452452664611144560355979722491291392"),
    MontFp!("2950059549285188013181916931658203370463912526166425394161627113525340552060"),
    MontFp!("3707999811350219380432741376678614486540365864569586987196860790394724526648"),
    MontFp!("2140854186169685348670815058631538454922732099942137485668926898724201674659"),
    MontFp!("7468652076037969076499254865972634827247643668936025514456667835334012427225"),
    MontFp!("1757970002590436992134221206272899348034028285789693801345601389872214347600"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("3090566134820885578578884580453760958423513249194804769976859720189425678748"),
    MontFp!("1014956631064737930693609905134287803771633237096924461974788247575178647239"),
    MontFp!("8163400103508684878783805217025428614561071180858715453129335917580465265931"),
    MontFp!("1486396036463796488918910836112179579921345689769531073796275169260909811548"),
    MontFp!("2944068876626515619975636201343790940955795063905239465828001989234937362357"),
    MontFp!("2129508534771598658360969479807111088250507042824235641703160169652575627896"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("1328660600287037476318890124773758269717433143569852966469740536814738764583"),
    MontFp!("2799059352114106880989935270105748212377424368024585897469983757644556127822"),
    MontFp!("3754944908267757077838580510477741735186709775179387743182973860443996144075"),
    MontFp!("2771121126924941019197733171990855353004989462795700586008432116507066843083"),
    MontFp!("7891946787816327042641514602122794384117585976254993077005488594311364949400"),
    MontFp!("3198144626605300800949161456570029506551585754496305162893273212825538587550"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("2146234887323775547765017169111001441946197048628264449963777969392092532866"),
    MontFp!("6016882273004400191030618355355462941359941008232443084883169315980534923336"),
    MontFp!("8006919309363258877422299919790609569913200875861317349068808159703442135037"),
    MontFp!("2235960321603888158431253152193753210092382095378613695660507138332654702850"),
    MontFp!("8038232675840346850478414906021807042143478527454501830157679770453874177003"),
    MontFp!("1958792433797404280604077529184967132537621891289866404211114861458653949012"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("6591150173178976090819472555078788691458408107801555095220191242530347129242"),
    MontFp!("1680294818293804805201741644942769167735966926003269256043494449110552726734"),
    MontFp!("7789378020387063323150139272617540367093982687550904210604066962883002948462"),
    MontFp!("557501750804917719278599042857355157253445559588197504272305070909202142947"),
    MontFp!("3034616829454605187995721626183737309348405614367904348286546698648524072591"),
    MontFp!("6840220540939175845358210160992790877841509186318513396074503225536561679543"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("65347871940096062464336677677087215362501571452721124249338201459654656"),
    MontFp!("5066505145950466159873820805003751929801682558731762266794909044949536630375"),
    MontFp!("3619164376983759136165998027265134279132696018847361888020397233621204879653"),
    MontFp!("4238685146588912991052277150923591342201137010140128645266349261112913828465"),
    MontFp!("6643030753404610703732031460459579946840680195722822216243745344807210311119"),
    MontFp!("2475680996810491813273296295668023475775994019707601554410767671042799240208"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("6755569400871628389748965640026098152391559369353920566332119369412544508724"),
    MontFp!("1688892346389793676903865486300311421055760223094655503467542801678357810381"),
    MontFp!("1206351680713365901974237654437691495950129065612054602850957455273387322807"),
    MontFp!("8019852686115271278325540117810432061362453551296617166084865346777213399915"),
    MontFp!("4423157693090536003736289868489603415097102968594072262271284571252976367732"),
    MontFp!("7706259014114251980167953943066693142549450681284425615883026028251594044946"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("3377784699771375195222198351607422413381921984968660810916631631032839936410"),
    MontFp!("6755569399542625246226774733078000065414840635412284482803516432087117935412"),
    MontFp!("6031758392448881237026906155776404016889561912829977465380028085864894112915"),
    MontFp!("6547126942154328147320832443050612487497491870705666391200907681492196529418"),
    MontFp!("679282140679490816916885632985394982219355753042789927075966984538450992678"),
    MontFp!("1975639825505718164338386153081112451212146345707795487585389182032710201113"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("6755569399542696339948658311081797349951106141828324629477181234635848495924"),
    MontFp!("6755569399542696337953289914359298130438897264386806281741085093144506348340"),
    MontFp!("4825406713959068814776071607763904458071309047699968339412917891778783065820"),
    MontFp!("6626352097246581455466134744323875054956097790450108755408293744346547543342"),
    MontFp!("3153206513984021945987159774654328831706100102818705029007782698669073005829"),
    MontFp!("6562485048611979813357322527660102014079135660024413816929004954275379368969"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("1688892349885674084849776164537646094768714342946991065214962639370703391949"),
    MontFp!("8444461749428370424248795537209894401759823084395407994935701963602051203073"),
    MontFp!("7238110070938603220784725791623593342662835128913443783224258232472943497802"),
    MontFp!("5473866939914824801054396283089499717847009173955743300757985699921346860815"),
    MontFp!("5234336354114260164427300465913302641345540877335129370065902402214025364959"),
    MontFp!("1126975122664037400697387419759870796596612128286867910666937144343541879604"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("1688892349885674084849764987983603363407242277637089092625547354332839333069"),
    MontFp!("5066677049657022254549294962671009582096962770933563908296669278685488375399"),
    MontFp!("2412703356979534406928235697175041058034702272660717672140791842141361331054"),
    MontFp!("3417891366961923935460362758841213240150104820792599187657174842229210836976"),
    MontFp!("2109930449684567405588381218450859449011546053415687711099097241022929718138"),
    MontFp!("7467840434764573222855383263695640871779849975911853941299539330373675309347"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("4622313602710048294285602833020481471250432"),
    MontFp!("6755569399542696339399059951025225065671229569651381970019676835240870097716"),
    MontFp!("3619055035469301610392353545192099104747718114858051351660821727823107606821"),
    MontFp!("2597398556798267401976238549646636908466233983170491393742918965618011459929"),
    MontFp!("2068234554183111213575590722108642658093927628419051308673851496635944475991"),
    MontFp!("7442133310898290472737295900345544691226300883425401862652287408611005187797"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("3377784699771348169699529975512618612644360357357220088998231724311466056090"),
    MontFp!("5066677049657022254549294963268927918578262144560896192731910442067666822759"),
    MontFp!("1206351678489767203464117848397363790353840983927040626734569653768340336055"),
    MontFp!("8125311612818390195384634554117840331472763470372509544364555906952801559214"),
    MontFp!("1058120093155715639328496535505151563553771572720848047656669554775872868679"),
    MontFp!("3508635590708952723910460369954844233710129661900433523794510313695248221631"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("1688892349885674084849764987756309306275181778652987163206062314875400277197"),
    MontFp!("3377784699771348169699529975512618612550354705360191840862884110145290869146"),
    MontFp!("6031758392448836017320589241986818950982788437964548939286223273763996771475"),
    MontFp!("5846024911947218980385047513337298856881854435537746492673035925112641190641"),
    MontFp!("3399496119324756229406913700177768543891693359473529460914461193715484462621"),
    MontFp!("8285525267580751635819188227169197672725284412519278374652722416809297463548"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("3377784699771348169699529975512618612550359734100500798268412440940394420634"),
    MontFp!("3377784699771348169699529975512618612550359733959360494708978513021606926746"),
    MontFp!("4825406713959068813856471393589455160786228191581654864230703866938630452956"),
    MontFp!("6311155675687157278118438099403853555750805989305197351124885481009701940564"),
    MontFp!("7804525420484563253140210874229577506103020673697061432389267634450181798069"),
    MontFp!("8121654451264725445562806320020308670749229358947667984745878360010714898527"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("5066677049657022254549294963268927918825539601092439087339117195636575463015"),
    MontFp!("8444461749428370424248824938781546531375899335154061748245710998393075400705"),
    MontFp!("7238110070938603220784707090384182741179342287274913175328589826044429636170"),
    MontFp!("2517931337784671469746065209438950124555697011910302568267146216785362777665"),
    MontFp!("1871398140745686429249372615212938376575517207318403151829567332458561958868"),
    MontFp!("3977305820851493523602032776891834601924844986115642713533201821764692325958"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("5066677049657022254549294963268927918825539601092438296777217481754298410599"),
    MontFp!("6755569399542696339399059951025237225100719468123251062305893634457381237556"),
    MontFp!("2412703356979534406928235696794727580393114095758303950865539207657098402670"),
    MontFp!("6087395921021275780628874587899188804568416515344015561012376477127152419750"),
    MontFp!("5355926780034961154065801377154310921441757660111086558798718807318312050322"),
    MontFp!("5101629178073013167316837323585703772385116812301151937785443084424112914710"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("326954555854848"),
    MontFp!("3377784699771348169699529975512618612550359734061625531174092522282388222362"),
    MontFp!("3619055035469301610392353545192091370589671143637455926257957742460761127205"),
    MontFp!("3020607076656756078418837235637442188306522617192578641389204937737014650962"),
    MontFp!("5637220359779161156373647100061456652227512307027696275393780604040622884745"),
    MontFp!("7668244523520435283525964877159182945565842688382326226602525369239387851908"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("1688892349885674084849764987756309306275179867030812765587046691190130973389"),
    MontFp!("6755569399542696339399059951025237225100719468123251062348186764716436454964"),
    MontFp!("1206351678489767203464117848397363790196557047879151975419319065142183688119"),
    MontFp!("7260868788947148597424134313681494118239763444543928261311440896297503846856"),
    MontFp!("7084065973824866808145857319606641283427841345827946323453078374104009662566"),
    MontFp!("7191857281660704661880284238619626408822191886264792206174412875086997153626"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("5066677049657022254549294963268927918825539601092438296761140073550445679015"),
    MontFp!("1688892349885674084849764987756309306275179867030812765587046691183481492013"),
    MontFp!("6031758392448836017320589241986818950982785239395759877096595325655292539475"),
    MontFp!("7811127118221242642430163068372930541522706885017509040840090946723603546113"),
    MontFp!("5078405468753450546805196109017235622341339461280152274299939008905886389590"),
    MontFp!("6079789061129447118939993934098936212999870381116874261303105251396621493135"),
    MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
    MontFp!("1688892349885674084849764987756309306275179867030812765587046691183481847813"),
    MontFp!("1688892349885674084849764987756309306275179867030812765587046691183481847801"),
    MontFp!("4825406713959068813856471393589455160786228191516607901677276260524233850884"),
    MontFp!("6755569399542696339399059951025237225100719468123251062348186764733927391233"),
    MontFp!("7037051457856975353540687448984622109479916112628386523279361213264507699201"),
    MontFp!("7238110070938603220784707090384182741179342287274911852515914390786350776321"),
];

/// Full-round mixing matrix `M`.
pub static MDS_MATRIX: [[Fr; SPONGE_WIDTH]; SPONGE_WIDTH] = [
    [
        MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
        MontFp!("6755569399542696339399059951025237225100719468123251062348186764733927391233"),
        MontFp!("7037051457856975353540687448984622109479916112628386523279361213264507699201"),
        MontFp!("7238110070938603220784707090384182741179342287274911852515914390786350776321"),
    ],
    [
        MontFp!("6755569399542696339399059951025237225100719468123251062348186764733927391233"),
        MontFp!("7037051457856975353540687448984622109479916112628386523279361213264507699201"),
        MontFp!("7238110070938603220784707090384182741179342287274911852515914390786350776321"),
        MontFp!("7388904030749824121217721821433853214953911918259805849443329273927733084161"),
    ],
    [
        MontFp!("7037051457856975353540687448984622109479916112628386523279361213264507699201"),
        MontFp!("7238110070938603220784707090384182741179342287274911852515914390786350776321"),
        MontFp!("7388904030749824121217721821433853214953911918259805849443329273927733084161"),
        MontFp!("4691367638571316902360458299323081406319944075085591015519574142176338466134"),
    ],
    [
        MontFp!("7238110070938603220784707090384182741179342287274911852515914390786350776321"),
        MontFp!("7388904030749824121217721821433853214953911918259805849443329273927733084161"),
        MontFp!("4691367638571316902360458299323081406319944075085591015519574142176338466134"),
        MontFp!("7600015574485533381823942444903391878238309401638657445141710110325668315137"),
    ],
];

/// Transition matrix `P`, applied once before the partial rounds.
pub static PRE_SPARSE_MATRIX: [[Fr; SPONGE_WIDTH]; SPONGE_WIDTH] = [
    [
        MontFp!("6333346312071277818186618704086159898531924501365547870951425091938056929281"),
        MontFp!("2218707687224192367973228887163119767679230011923941129316515034551562059699"),
        MontFp!("8054021250624320899920651774886942029236287437634255968134948973014734798709"),
        MontFp!("2983803336623548091740560972400094368655557696899493070627852965550948029253"),
    ],
    [
        MontFp!("6755569399542696339399059951025237225100719468123251062348186764733927391233"),
        MontFp!("1677013510009710898062842617949901116612499468099129425390407437616377654361"),
        MontFp!("4031382401975403621567389662629650255292128562815826065800597919438446451779"),
        MontFp!("783713466396712738152812720178051778704484117651474493897878405293849555722"),
    ],
    [
        MontFp!("7037051457856975353540687448984622109479916112628386523279361213264507699201"),
        MontFp!("4031382401975403621567389662629650255292128562815826065800597919438446451779"),
        MontFp!("228443036558962596567161323586809116810904559525424756739395421839982953128"),
        MontFp!("70075643161709873358565206943175277974602362548865295615791513217884975374"),
    ],
    [
        MontFp!("7238110070938603220784707090384182741179342287274911852515914390786350776321"),
        MontFp!("783713466396712738152812720178051778704484117651474493897878405293849555722"),
        MontFp!("70075643161709873358565206943175277974602362548865295615791513217884975374"),
        MontFp!("7872104118244443243564356227300712768130563398839648412908267696287422612237"),
    ],
];

//  ---------------------------------------------------------------------------
//  Start-up checks
//  ---------------------------------------------------------------------------

static TABLE_CHECK: Lazy<Result<(), ConfigError>> = Lazy::new(|| {
    let res = check_len(
        "round constants",
        ROUND_CONSTANTS.len(),
        NUM_ROUND_CONSTANTS,
    )
    .and_then(|()| {
        check_len(
            "sparse constants",
            SPARSE_CONSTANTS.len(),
            NUM_SPARSE_CONSTANTS,
        )
    });
    match &res {
        Ok(()) => debug!(
            round_constants = ROUND_CONSTANTS.len(),
            sparse_constants = SPARSE_CONSTANTS.len(),
            "poseidon tables match the round schedule"
        ),
        Err(e) => error!(%e, "poseidon tables rejected"),
    }
    res
});

/// Check the tables against the round schedule. The check itself runs once per
/// process; later calls return the cached verdict.
pub fn validate() -> Result<(), ConfigError> {
    TABLE_CHECK.clone()
}

fn check_len(table: &'static str, found: usize, expected: usize) -> Result<(), ConfigError> {
    if found == expected {
        Ok(())
    } else {
        Err(ConfigError::TableLength {
            table,
            expected,
            found,
        })
    }
}

/// SHA3-256 over the canonical little-endian encoding of every table entry
/// (round constants, sparse rows, then `M` and `P` row-major).
pub fn fingerprint() -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    let matrices = MDS_MATRIX.iter().chain(PRE_SPARSE_MATRIX.iter()).flatten();
    for c in ROUND_CONSTANTS.iter().chain(SPARSE_CONSTANTS).chain(matrices) {
        hasher.update(c.into_bigint().to_bytes_le());
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{Field, One};

    #[test]
    fn tables_match_schedule() {
        assert_eq!(ROUND_CONSTANTS.len(), 88);
        assert_eq!(SPARSE_CONSTANTS.len(), 392);
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn fingerprint_is_pinned() {
        // Catches transcription errors in any table entry.
        assert_eq!(
            hex::encode(fingerprint()),
            "9adf36d43040f08b2aafce3d7aa5a57050ffef82a8dfd52326a6cf950aa57e2a"
        );
    }

    #[test]
    fn mds_is_cauchy() {
        for (i, row) in MDS_MATRIX.iter().enumerate() {
            for (j, m) in row.iter().enumerate() {
                let denom = Fr::from((i + SPONGE_WIDTH + j) as u64);
                assert_eq!(denom.inverse(), Some(*m));
                assert!((*m * denom).is_one());
            }
        }
    }

    #[test]
    fn transition_matrix_keeps_first_column() {
        // P = M · diag(1, M̂'), so the lane-0 column is inherited from M.
        for j in 0..SPONGE_WIDTH {
            assert_eq!(PRE_SPARSE_MATRIX[j][0], MDS_MATRIX[j][0]);
        }
    }

    #[test]
    fn check_len_reports_mismatch() {
        assert_eq!(
            check_len("round constants", 87, NUM_ROUND_CONSTANTS),
            Err(ConfigError::TableLength {
                table: "round constants",
                expected: 88,
                found: 87,
            })
        );
    }
}
